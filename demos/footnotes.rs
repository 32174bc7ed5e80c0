//! Rewrite a short document and print the result.
//!
//! Run:
//!   RUST_LOG=linknotes=trace cargo run --example footnotes

use linknotes::LinkFootnoteTransformer;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let doc = "# Reading list\n\n\
               Start with [the book](https://doc.rust-lang.org/book/), then \
               [Rust by Example](https://doc.rust-lang.org/rust-by-example/).\n\
               When stuck, go back to [the book](https://doc.rust-lang.org/book/).";

    println!("{}\n", linknotes::transform(doc));

    let out = LinkFootnoteTransformer::new().transform_detailed(doc);
    for footnote in &out.footnotes {
        println!("{} -> {}", footnote.label(), footnote.url);
    }
}

//! Builds a few selectors and prints them.
//!
//! Run with `cargo run --example selectors`. Rejected parts are logged to
//! `selectors.log`.

use selector_kit::{Combinator, Rectangle, facade, init_logger, to_json};

fn main() -> selector_kit::Result<()> {
    init_logger("selectors.log")?;

    let editable = facade::id("main")?.class("container")?.class("editable")?;
    println!("{editable}");

    let image_link = facade::element("a")?
        .attr(r#"href$=".png""#)?
        .pseudo_class("focus")?;
    println!("{image_link}");

    let siblings = facade::combine(
        &facade::element("div")?.id("main")?,
        Combinator::AdjacentSibling,
        &facade::element("table")?.id("data")?,
    );
    println!("{siblings}");

    if let Err(err) = facade::class("x")?.element("div") {
        println!("rejected: {err}");
    }

    let area = Rectangle::new(10.0, 20.0);
    println!("{} has area {}", to_json(&area)?, area.area());

    Ok(())
}

// Example: a controller over styled items whose heights come from px strings.
use flow_render::FlowOptions;
use flow_render_adapter::{Controller, ParsePxError, StyledItem};

fn main() -> Result<(), ParsePxError> {
    let sizes = ["24px", "48px", " 32.5px ", "24"];
    let items = (0..500)
        .map(|i| StyledItem::from_px(format!("row {i}"), sizes[i % sizes.len()]))
        .collect::<Result<Vec<_>, _>>()?;

    let mut c = Controller::from_items(FlowOptions::new(0, 20), items);
    c.mount(0, 300);

    for offset in (0..=2_000).step_by(16) {
        c.on_scroll(offset, None);
    }
    let out = c.render();
    println!(
        "padding_top={} height={} range={:?}",
        out.padding_top, out.height, out.range
    );
    for item in out.items.iter().take(3) {
        println!("  {} ({}px)", item.data, item.height);
    }

    // A row grew after its content loaded.
    c.resize_item(out.range.start_index + 1, 120);
    let out = c.render();
    println!("after resize: height={} range={:?}", out.height, out.range);

    match StyledItem::from_px("broken", "tall") {
        Ok(_) => println!("unexpected"),
        Err(err) => println!("rejected: {err}"),
    }
    Ok(())
}

// Example: items built on demand; only the visible slice is ever constructed.
use flow_render::FlowOptions;
use flow_render_adapter::{Controller, ItemProvider};

fn main() {
    let provider = ItemProvider::getter(1_000_000, |i| (i as u32 % 5) * 10 + 20);
    let mut c = Controller::new(FlowOptions::new(0, 40), provider);
    c.mount(0, 600);
    c.on_scroll(5_000_000, None);

    let mut visible = Vec::new();
    let frame = c.render_into(&mut visible);
    println!("frame={frame:?}");
    println!("built {} items, first height={:?}", visible.len(), visible.first());

    c.set_getter(1_000_100, |i| (i as u32 % 5) * 10 + 20);
    println!("after append: height={}", c.flow().content_height());
}

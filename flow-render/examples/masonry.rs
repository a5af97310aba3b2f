// Example: a three-column masonry grid with declared heights and a late resize.
use flow_render::{FlowOptions, FlowRender};

fn height_of(i: usize) -> u32 {
    // Deterministic pseudo-random heights between 80 and 240.
    80 + ((i as u32).wrapping_mul(2_654_435_761) >> 24) % 161
}

fn main() {
    let options = FlowOptions::variable(10_000, 60, height_of).with_column(3);
    let mut f = FlowRender::new(options);
    f.mount(120, 800);
    println!("tracks={:?}", f.cache().track_heights());

    f.scroll(250_000, None);
    f.reconcile();
    let frame = f.frame();
    println!("frame={frame:?}");
    f.for_each_visible_rect(|i, rect| {
        if i < frame.range.start_index + 3 {
            println!("  item {i}: top={} height={}", rect.top, rect.height);
        }
    });

    // Images from the first visible item onward finished loading 10px taller.
    f.reproject_from_with(frame.range.start_index, |i| height_of(i) + 10);
    f.reconcile();
    println!("after resize: {:?}", f.frame());
}

// Example: a uniform list of one million rows, scrolled incrementally and then by a jump.
use flow_render::{FlowOptions, FlowRender};

fn main() {
    let mut f = FlowRender::new(FlowOptions::uniform(1_000_000, 30, 20));
    f.mount(0, 400);

    for offset in (0..=200).step_by(10) {
        f.scroll(offset, None);
    }
    f.reconcile();
    println!("content_height={}", f.content_height());
    println!("after small scroll: {:?}", f.frame());

    // One event far away: the step moves a single item, reconcile catches up.
    f.scroll(12_345_678, None);
    println!("before reconcile: start={}", f.start());
    f.reconcile();
    println!("after reconcile: {:?}", f.frame());

    let mut indexes = Vec::new();
    f.collect_visible_indexes(&mut indexes);
    println!("first={:?} last={:?}", indexes.first(), indexes.last());
}

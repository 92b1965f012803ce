use anyhow::{Context, Result, bail};
use trellis_engine::logging::{LoggingConfig, init_logging};
use trellis_ui::prelude::*;

const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 600.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (width, height) = match std::env::args().nth(1) {
        Some(arg) => parse_viewport(&arg)
            .with_context(|| format!("invalid viewport argument `{arg}`"))?,
        None => DEFAULT_VIEWPORT,
    };
    log::info!("laying out sample scene in a {width}x{height} viewport");

    let mut world = World::new();
    let root = build_scene(&mut world, width, height).context("building sample scene")?;

    let mut schedule = LayoutSchedule::new();
    let stats = schedule.run(&mut world);
    log::info!(
        "tick {}: {} containers, {} child rects",
        schedule.ticks(),
        stats.containers,
        stats.children
    );

    print_tree(&world, root, 0);

    // Nothing changed, so a second tick must reproduce the first.
    let before = snapshot(&world, root);
    schedule.run(&mut world);
    let drifted = before
        .iter()
        .filter(|(e, r)| world.get::<Rect>(*e).is_some_and(|now| !now.approx_eq(*r, 0.01)))
        .count();
    if drifted > 0 {
        bail!("{drifted} rects moved on an unchanged second tick");
    }
    log::info!("second tick stable");
    Ok(())
}

/// Parse `WIDTHxHEIGHT`, e.g. `1280x720`.
fn parse_viewport(arg: &str) -> Result<(f32, f32)> {
    let (w, h) = arg.split_once(['x', 'X']).context("expected WIDTHxHEIGHT")?;
    let w: f32 = w.trim().parse().context("width is not a number")?;
    let h: f32 = h.trim().parse().context("height is not a number")?;
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        bail!("viewport must be positive, got {w}x{h}");
    }
    Ok((w, h))
}

/// Header toolbar, icon grid sidebar, and a content area with a centered dialog.
fn build_scene(world: &mut World, width: f32, height: f32) -> Result<Entity> {
    let root = UiNode::new(Rect::sized(width, height)).container("window").spawn(world);

    let header = UiNode::new(Rect::sized(0.0, 48.0))
        .dock(DockSide::Top)
        .flex(
            FlexLayout::row()
                .gap(8.0)
                .padding(Edges::symmetric(8.0, 12.0))
                .justify(JustifyContent::Start)
                .align_items(Align::Center),
        )
        .container("header")
        .spawn_child(world, root)?;
    for (label, grow) in [("file", 0.0), ("edit", 0.0), ("search", 1.0), ("help", 0.0)] {
        UiNode::new(Rect::sized(64.0, 28.0))
            .item(FlexItem::new().grow(grow).constraints(SizeConstraints::none().max_width(360.0)))
            .container(label)
            .spawn_child(world, header)?;
    }

    let sidebar = UiNode::new(Rect::sized(180.0, 0.0))
        .dock(DockSide::Left)
        .grid(GridLayout::columns(3).gap(6.0).padding(Edges::all(6.0)))
        .container("sidebar")
        .spawn_child(world, root)?;
    for _ in 0..9 {
        UiNode::new(Rect::default()).spawn_child(world, sidebar)?;
    }

    let status = UiNode::new(Rect::sized(0.0, 24.0))
        .dock(DockSide::Bottom)
        .container("status")
        .spawn_child(world, root)?;
    UiNode::new(Rect::sized(120.0, 16.0))
        .anchor(AnchorLayout::new(Anchor::CenterRight).offset(-8.0, 0.0))
        .spawn_child(world, status)?;

    let content = UiNode::new(Rect::default())
        .dock(DockSide::Fill)
        .container("content")
        .clip_children()
        .spawn_child(world, root)?;
    let dialog = UiNode::new(Rect::sized(320.0, 180.0))
        .anchor(AnchorLayout::new(Anchor::Center))
        .flex(FlexLayout::column().padding(Edges::all(12.0)).gap(8.0))
        .container("dialog")
        .spawn_child(world, content)?;
    UiNode::new(Rect::sized(0.0, 24.0)).spawn_child(world, dialog)?;
    UiNode::new(Rect::sized(0.0, 40.0))
        .item(FlexItem::new().grow(1.0))
        .spawn_child(world, dialog)?;
    let buttons = UiNode::new(Rect::sized(0.0, 32.0))
        .flex(FlexLayout::new(FlexDirection::RowReverse).gap(8.0))
        .spawn_child(world, dialog)?;
    for _ in 0..2 {
        UiNode::new(Rect::sized(80.0, 32.0)).spawn_child(world, buttons)?;
    }

    Ok(root)
}

fn print_tree(world: &World, e: Entity, depth: usize) {
    let name = world.get::<UiContainer>(e).map_or("-", |c| c.id.as_str());
    if let Some(r) = world.get::<Rect>(e) {
        log::info!(
            "{:indent$}{name} [{e}] x={:.1} y={:.1} w={:.1} h={:.1}",
            "",
            r.x,
            r.y,
            r.width,
            r.height,
            indent = depth * 2
        );
    }
    for &child in world.children_of(e) {
        print_tree(world, child, depth + 1);
    }
}

fn snapshot(world: &World, root: Entity) -> Vec<(Entity, Rect)> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(e) = stack.pop() {
        if let Some(r) = world.get::<Rect>(e) {
            out.push((e, *r));
        }
        stack.extend_from_slice(world.children_of(e));
    }
    out
}

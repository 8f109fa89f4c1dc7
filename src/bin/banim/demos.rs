use banim::{
    AddWaypoint, Animation, Block, BorderTo, Circle, Ease, GateType, GridConfig, GridCoord,
    LogicGate, MoveLineEnd, MoveTo, PortDirection, Rectangle, ResizeTo, Rgba, Scene, StrokeTo,
    Text, Wire,
};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Two blocks joined by an auto-routed wire, one of them wandering around.
    Wires,
    /// A small gate network feeding a block.
    Gates,
    /// Plain shapes and a text label on the visible grid.
    Grid,
}

pub fn default_grid() -> anyhow::Result<GridConfig> {
    Ok(GridConfig::new(32, 18, 1920.0, 1080.0)?)
}

pub fn build(demo: Demo, grid: GridConfig) -> anyhow::Result<Scene> {
    let mut scene = Scene::new(grid)?;
    match demo {
        Demo::Wires => wires(&mut scene)?,
        Demo::Gates => gates(&mut scene)?,
        Demo::Grid => shapes(&mut scene)?,
    }
    Ok(scene)
}

fn g(x: f64, y: f64) -> GridCoord {
    GridCoord::new(x, y)
}

fn wires(scene: &mut Scene) -> anyhow::Result<()> {
    let src = scene.add(
        Block::new(g(3.0, 6.0), 5.0, 4.0, "source")
            .with_port(PortDirection::Right, "out")
            .with_port(PortDirection::Bottom, "tap"),
    );
    let dst = scene.add(
        Block::new(g(22.0, 4.0), 5.0, 4.0, "sink")
            .with_color(Rgba::new(0.6, 0.3, 0.3, 1.0))
            .with_port(PortDirection::Left, "in"),
    );
    let probe = scene.add(
        Block::new(g(14.0, 13.0), 4.0, 3.0, "probe")
            .with_color(Rgba::new(0.3, 0.55, 0.3, 1.0))
            .with_port(PortDirection::Top, "in"),
    );
    scene.add_without_animation(Wire::between(src, "out", dst, "in"));
    let tap = scene.add_without_animation(Wire::between(src, "tap", probe, "in"));
    scene.wait(0.5)?;

    scene.play(MoveTo::new(dst, g(22.0, 11.0), 1.5)?.with_ease(Ease::EaseInOut));
    scene.play_group(vec![
        Box::new(MoveTo::new(src, g(6.0, 2.0), 1.0)?.with_ease(Ease::Back)),
        Box::new(ResizeTo::new(probe, 6.0, 3.0, 1.0)?),
    ]);
    scene.play(BorderTo::new(dst, 40.0, 0.75)?);

    let thick = StrokeTo::new(scene.entities(), tap, 6.0, 0.5)?;
    scene.play(thick);
    scene.wait(0.5)?;
    Ok(())
}

fn gates(scene: &mut Scene) -> anyhow::Result<()> {
    let and = scene.add(LogicGate::new(GateType::And, PortDirection::Right, g(4.0, 3.0), 3.0, 3.0));
    let or = scene.add(LogicGate::new(GateType::Or, PortDirection::Right, g(4.0, 11.0), 3.0, 3.0));
    let xor = scene.add(LogicGate::new(GateType::Xor, PortDirection::Right, g(14.0, 7.0), 3.0, 3.0));
    let not = scene.add(LogicGate::new(GateType::Not, PortDirection::Right, g(21.0, 7.0), 3.0, 3.0));
    let out = scene.add(
        Block::new(g(27.0, 7.0), 3.0, 3.0, "Q")
            .with_color(Rgba::new(0.2, 0.2, 0.25, 1.0))
            .with_port(PortDirection::Left, "d"),
    );

    let wires = [
        Wire::between(and, "output", xor, "input1"),
        Wire::between(or, "output", xor, "input2"),
        Wire::between(xor, "output", not, "input"),
        Wire::between(not, "output", out, "d"),
    ];
    for wire in wires {
        scene.add_without_animation(wire);
    }
    scene.wait(0.5)?;

    scene.play_group(vec![
        Box::new(MoveTo::new(and, g(6.0, 1.0), 1.0)?.with_ease(Ease::EaseOut)),
        Box::new(MoveTo::new(or, g(6.0, 13.0), 1.0)?.with_ease(Ease::EaseOut)),
    ]);
    scene.play(MoveTo::new(xor, g(14.0, 9.0), 1.0)?.with_ease(Ease::Elastic));
    scene.wait(0.5)?;
    Ok(())
}

fn shapes(scene: &mut Scene) -> anyhow::Result<()> {
    let title = Text::new(g(15.5, 1.5), "banim", 64.0);
    scene.add(title);

    let rect = scene.add(Rectangle::new(g(2.0, 4.0), 4.0, 3.0).with_color(Rgba::rgb(0.9, 0.5, 0.2)));
    let ring = scene.add_with(
        Circle::new(g(12.0, 9.0), 2.0).outlined(4.0),
        |id| Ok(banim::PopIn::new(id, 1.0)?.with_ease(Ease::Bounce)),
    )?;
    let path = scene.add(
        banim::Line::new(g(2.0, 14.0), g(10.0, 14.0))
            .with_color(Rgba::rgb(0.9, 0.9, 0.3))
            .with_stroke_width(4.0),
    );

    let moves: Vec<Box<dyn Animation>> = vec![
        Box::new(MoveTo::new(rect, g(24.0, 4.0), 2.0)?.with_ease(Ease::EaseInOut)),
        Box::new(MoveTo::new(ring, g(20.0, 12.0), 2.0)?),
    ];
    scene.play_group(moves);
    scene.play(AddWaypoint::new(path, g(10.0, 10.0), 0.5)?);
    scene.play(MoveLineEnd::new(path, g(18.0, 10.0), 1.0)?.with_ease(Ease::EaseOut));
    scene.wait(0.5)?;
    Ok(())
}

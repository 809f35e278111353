use cairo::{Context, ImageSurface};
use minipaint::canvas::{PointerOutcome, RepaintFlag};
use minipaint::draw::{AMBER, StrokeStyle, YELLOW, read_pixel};
use minipaint::input::{PointerPhase, PointerSample};
use minipaint::util::Point;
use minipaint::{CanvasSettings, DrawingSurface, LayeredCanvas};

const TOL: f64 = 8.0;
const BACKGROUND: [u8; 4] = [255, 235, 59, 255];
const INK: [u8; 4] = [255, 193, 7, 255];

fn make_canvas(width: i32, height: i32) -> (LayeredCanvas, RepaintFlag) {
    let flag = RepaintFlag::new();
    let settings = CanvasSettings {
        background: YELLOW,
        stroke: StrokeStyle::new(AMBER, 12.0, true),
        frame_inset: 40,
        touch_tolerance: TOL,
        repaint_on_dropped_move: true,
    };
    let mut canvas = LayeredCanvas::new(settings, flag.clone());
    canvas.resize(width, height, 0, 0).unwrap();
    flag.take();
    (canvas, flag)
}

fn event(canvas: &mut LayeredCanvas, phase: PointerPhase, x: f64, y: f64) -> PointerOutcome {
    canvas
        .pointer_event(phase, PointerSample::new(x, y, 0))
        .unwrap()
}

fn stroke(canvas: &mut LayeredCanvas, points: &[(f64, f64)]) {
    let (x0, y0) = points[0];
    event(canvas, PointerPhase::Start, x0, y0);
    for &(x, y) in &points[1..] {
        event(canvas, PointerPhase::Move, x, y);
    }
    let (xn, yn) = points[points.len() - 1];
    event(canvas, PointerPhase::End, xn, yn);
}

fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> [u8; 4] {
    read_pixel(surface, x, y).expect("pixel inside surface")
}

#[test]
fn end_to_end_single_segment() {
    let (mut canvas, flag) = make_canvas(200, 200);

    assert_eq!(
        event(&mut canvas, PointerPhase::Start, 10.0, 10.0),
        PointerOutcome::Started
    );
    let moved = event(&mut canvas, PointerPhase::Move, 10.0, 10.0 + TOL + 1.0);
    let PointerOutcome::Stenciled { segment, .. } = moved else {
        panic!("expected a stenciled segment, got {moved:?}");
    };
    assert_eq!(segment.control, Point::new(10.0, 10.0));
    assert_eq!(segment.end, Point::new(10.0, 10.0 + (TOL + 1.0) / 2.0));
    assert_eq!(canvas.tracker().path().segment_count(), 1);
    assert_eq!(flag.take(), 1);

    assert_eq!(
        event(&mut canvas, PointerPhase::End, 10.0, 10.0 + TOL + 1.0),
        PointerOutcome::Ended
    );
    assert!(canvas.tracker().path().is_empty());

    // The short stroke near x=10 is baked in; the dropped tail is not.
    assert_eq!(canvas.raster_pixel(10, 12), Some(INK));
    assert_eq!(canvas.raster_pixel(10, 30), Some(BACKGROUND));
    assert_eq!(canvas.raster_pixel(30, 12), Some(BACKGROUND));
}

#[test]
fn tolerance_gate_keeps_raster_untouched_but_repaints() {
    let (mut canvas, flag) = make_canvas(200, 200);
    event(&mut canvas, PointerPhase::Start, 100.0, 100.0);
    let outcome = event(&mut canvas, PointerPhase::Move, 104.0, 95.0);

    assert_eq!(outcome, PointerOutcome::Dropped);
    assert_eq!(flag.take(), 1);
    assert_eq!(
        canvas.tracker().gesture().unwrap().last_committed,
        Point::new(100.0, 100.0)
    );
    assert_eq!(canvas.raster_pixel(100, 100), Some(BACKGROUND));
}

#[test]
fn strokes_persist_across_gestures() {
    let (mut canvas, _) = make_canvas(300, 300);
    stroke(&mut canvas, &[(60.0, 60.0), (60.0, 120.0), (60.0, 180.0)]);
    stroke(&mut canvas, &[(200.0, 60.0), (200.0, 120.0), (200.0, 180.0)]);

    let mut snapshot = canvas.snapshot().unwrap();
    assert_eq!(pixel(&mut snapshot, 60, 80), INK);
    assert_eq!(pixel(&mut snapshot, 200, 80), INK);
    assert_eq!(pixel(&mut snapshot, 130, 80), BACKGROUND);
}

#[test]
fn resize_discards_previous_strokes() {
    let (mut canvas, _) = make_canvas(300, 300);
    stroke(&mut canvas, &[(60.0, 60.0), (60.0, 120.0), (60.0, 180.0)]);
    assert_eq!(canvas.raster_pixel(60, 80), Some(INK));

    canvas.resize(320, 240, 300, 300).unwrap();
    assert_eq!(canvas.viewport(), Some((320, 240)));

    let mut snapshot = canvas.snapshot().unwrap();
    assert_eq!((snapshot.width(), snapshot.height()), (320, 240));
    assert_eq!(pixel(&mut snapshot, 60, 80), BACKGROUND);
    // Frame edge at the new inset is still drawn.
    assert_eq!(pixel(&mut snapshot, 40, 120), INK);
    assert_eq!(pixel(&mut snapshot, 280, 120), INK);
    assert_eq!(pixel(&mut snapshot, 160, 120), BACKGROUND);
}

#[test]
fn render_composites_raster_then_frame() {
    let (canvas, _) = make_canvas(200, 160);
    let mut target = ImageSurface::create(cairo::Format::ARgb32, 200, 160).unwrap();
    {
        let ctx = Context::new(&target).unwrap();
        canvas.render(&ctx).unwrap();
    }

    assert_eq!(pixel(&mut target, 0, 0), BACKGROUND);
    assert_eq!(pixel(&mut target, 100, 40), INK);
    assert_eq!(pixel(&mut target, 100, 120), INK);
    assert_eq!(pixel(&mut target, 100, 80), BACKGROUND);
}

#[test]
fn render_leaves_raster_unchanged() {
    let (mut canvas, _) = make_canvas(200, 160);
    let target = ImageSurface::create(cairo::Format::ARgb32, 200, 160).unwrap();
    {
        let ctx = Context::new(&target).unwrap();
        canvas.render(&ctx).unwrap();
    }
    // The frame is an overlay only; the raster underneath keeps its background.
    assert_eq!(canvas.raster_pixel(100, 40), Some(BACKGROUND));
}

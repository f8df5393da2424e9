use dovs::{
    math::{FRAC_PI_2, TAU},
    prelude::*,
};
use speedy2d::{
    color::Color as ScreenColor,
    dimen::Vector2,
    window::{WindowHandler, WindowHelper},
    Graphics2D, Window,
};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const SCALE: FloatNum = 40.;
// segments used to approximate a circle outline
const CIRCLE_STEPS: usize = 96;

struct DrawHelper<'a> {
    graphics: &'a mut Graphics2D,
}

impl<'a> DrawHelper<'a> {
    // world y points up, screen y points down
    fn to_screen(point: &Point) -> Vector2<f32> {
        Vector2::new(
            (point.x() * SCALE + WIDTH as FloatNum / 2.) as f32,
            (HEIGHT as FloatNum / 2. - point.y() * SCALE) as f32,
        )
    }

    fn screen_color(color: Color) -> ScreenColor {
        match color {
            Color::Green => ScreenColor::from_rgb(0.1, 0.6, 0.2),
            Color::Blue => ScreenColor::from_rgb(0.1, 0.3, 0.9),
        }
    }
}

impl<'a> Renderer for DrawHelper<'a> {
    fn draw_segment(&mut self, start_point: &Point, end_point: &Point, color: Color) {
        self.graphics.draw_line(
            Self::to_screen(start_point),
            Self::to_screen(end_point),
            2.0,
            Self::screen_color(color),
        );
    }

    fn draw_circle(&mut self, center: &Point, radius: FloatNum, color: Color) {
        let Ok(outline) = Circle::new(*center, radius) else {
            return;
        };

        let step = TAU / CIRCLE_STEPS as FloatNum;
        for i in 0..CIRCLE_STEPS {
            let start_point = outline.point_at_angle(step * i as FloatNum);
            let end_point = outline.point_at_angle(step * (i + 1) as FloatNum);
            self.draw_segment(&start_point, &end_point, color);
        }
    }
}

struct Handler {
    robot_path: RobotPath,
    corridors: Vec<Corridor>,
    intersections: Vec<IntersectionPair>,
}

impl WindowHandler for Handler {
    fn on_draw(&mut self, _helper: &mut WindowHelper, graphics: &mut Graphics2D) {
        graphics.clear_screen(ScreenColor::from_gray(0.95));

        let mut helper = DrawHelper { graphics };

        self.corridors
            .iter()
            .for_each(|corridor| corridor.render(&mut helper));
        self.robot_path.render(&mut helper);

        for (side, point) in self.intersections.iter().flat_map(|pair| pair.iter()) {
            let color = match side {
                BoundarySide::First => ScreenColor::RED,
                BoundarySide::Second => ScreenColor::from_rgb(0.9, 0.5, 0.),
            };
            helper
                .graphics
                .draw_circle(DrawHelper::to_screen(point), 5., color);
        }
    }
}

fn main() {
    env_logger::init();

    let robot_path = RobotPath::from_velocity((1.5, 0.5), (0., -3., 0.)).unwrap();

    let corridors = vec![
        Corridor::linear((-6., 1.), (-6., 2.5), 0.2).unwrap(),
        Corridor::linear((4., -6.), (5.5, -6.), FRAC_PI_2).unwrap(),
        Corridor::circular((2., 4.), (2., 5.5), (0., 6., 0.), (2., 0.5)).unwrap(),
    ];

    let intersections = intersect_all(&robot_path, &corridors, &GeometryContext::default());

    for (index, pair) in intersections.iter().enumerate() {
        log::info!("corridor {index}: {} crossing points", pair.len());
    }

    let window = Window::new_centered("dovs corridors", (WIDTH, HEIGHT)).unwrap();

    window.run_loop(Handler {
        robot_path,
        corridors,
        intersections,
    })
}

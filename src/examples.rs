use crate::mesh::surface::SurfaceMesh;

pub struct SurfaceExample {
    pub name: &'static str,
    pub description: &'static str,
    pub height: fn(f32, f32) -> f32,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub steps: (usize, usize),
}

impl SurfaceExample {
    pub fn sample(&self) -> SurfaceMesh {
        let step_x = (self.x_range.1 - self.x_range.0) / self.steps.0 as f32;
        let step_y = (self.y_range.1 - self.y_range.0) / self.steps.1 as f32;
        SurfaceMesh::build(
            (self.x_range.0, self.y_range.0),
            (step_x, step_y),
            self.steps,
            self.height,
        )
    }
}

fn sine_product(x: f32, y: f32) -> f32 {
    x.sin() * y.sin()
}

fn ripple(x: f32, y: f32) -> f32 {
    let r = (x * x + y * y).sqrt();
    (r * 2.0).sin() / (r + 1.0)
}

fn saddle(x: f32, y: f32) -> f32 {
    x * x - y * y
}

fn peaks(x: f32, y: f32) -> f32 {
    let t1 = 3.0 * (1.0 - x) * (1.0 - x) * (-x * x - (y + 1.0) * (y + 1.0)).exp();
    let t2 = -10.0 * (x / 5.0 - x * x * x - y * y * y * y * y) * (-x * x - y * y).exp();
    let t3 = -1.0 / 3.0 * (-(x + 1.0) * (x + 1.0) - y * y).exp();
    t1 + t2 + t3
}

pub const SURFACE_EXAMPLES: &[SurfaceExample] = &[
    SurfaceExample {
        name: "Sine Waves",
        description: "Product of sine waves",
        height: sine_product,
        x_range: (-6.28, 6.28),
        y_range: (-6.28, 6.28),
        steps: (50, 50),
    },
    SurfaceExample {
        name: "Ripple",
        description: "Radial wave pattern",
        height: ripple,
        x_range: (-5.0, 5.0),
        y_range: (-5.0, 5.0),
        steps: (50, 50),
    },
    SurfaceExample {
        name: "Saddle",
        description: "x² - y²",
        height: saddle,
        x_range: (-3.0, 3.0),
        y_range: (-3.0, 3.0),
        steps: (50, 50),
    },
    SurfaceExample {
        name: "Peaks",
        description: "Multiple gaussian bumps",
        height: peaks,
        x_range: (-3.0, 3.0),
        y_range: (-3.0, 3.0),
        steps: (50, 50),
    },
];

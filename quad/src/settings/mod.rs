use glam::Vec4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self{ width: 1920, height: 1080 }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self{ width, height }
    }

    /// Zero-sized surfaces are raised to one pixel along that axis.
    pub fn clamped(self) -> Self {
        Self{ width: self.width.max(1), height: self.height.max(1) }
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub resolution: Resolution,
    pub clear_color: Vec4,
    pub instances: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            instances: 1,
        }
    }
}

impl Settings {
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn clear_color(mut self, clear_color: Vec4) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn instances(mut self, instances: u32) -> Self {
        self.instances = instances;
        self
    }
}

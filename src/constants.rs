/// Icon design constants: canvas geometry, palette and output sizes

pub mod canvas {
    /// Side length of the master canvas the icon is drawn on
    pub const SIZE: u32 = 256;
}

pub mod sizes {
    /// Square sizes embedded in the icon container, largest first
    pub const ICON_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];
}

pub mod palette {
    /// Background disc (#2196F3)
    pub const BACKGROUND: [u8; 4] = [0x21, 0x96, 0xF3, 0xFF];

    /// Waveform stroke
    pub const WAVE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

    /// In/out markers and their caps (#FF9800)
    pub const MARKER: [u8; 4] = [0xFF, 0x98, 0x00, 0xFF];
}

pub mod geometry {
    /// Background disc radius in pixels
    pub const DISC_RADIUS: f32 = 120.0;

    /// Waveform vertices as offsets from the canvas center
    pub const WAVE_POINTS: [(f32, f32); 8] = [
        (-70.0, 0.0),
        (-50.0, -30.0),
        (-30.0, 20.0),
        (-10.0, -20.0),
        (10.0, 30.0),
        (30.0, -25.0),
        (50.0, 15.0),
        (70.0, 0.0),
    ];

    pub const WAVE_WIDTH: f32 = 8.0;

    /// Horizontal distance of each marker from the center
    pub const MARKER_OFFSET_X: f32 = 50.0;

    /// Markers span -HALF_HEIGHT..+HALF_HEIGHT around the center
    pub const MARKER_HALF_HEIGHT: f32 = 50.0;

    pub const MARKER_WIDTH: f32 = 6.0;

    /// Radius of the cap drawn on top of each marker
    pub const MARKER_CAP_RADIUS: f32 = 8.0;
}

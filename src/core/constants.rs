// Shared visual tuning constants used by the web frontend.

// Wave field look (night-sea backdrop)
pub const WAVE_COLOR_RGB: [f32; 3] = [0.082, 0.133, 0.282]; // deep indigo, #152248
pub const WAVE_SHININESS: f32 = 35.0; // specular exponent
pub const WAVE_HEIGHT: f32 = 22.0; // crest amplitude fed to the shader
pub const WAVE_SPEED: f32 = 0.85; // time multiplier
pub const WAVE_ZOOM: f32 = 1.1; // uv scale around the center

// Surface clear color behind the waves, matching the page's midnight base
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.04, 0.1];

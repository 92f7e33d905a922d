use palette::{Clamp, IntoColor, LinSrgb, Mix, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `self` at `alpha` over `under`.
    ///
    /// Mixing happens in linear light so half-transparent gray over white
    /// lands where a compositor would put it.
    pub fn over(self, under: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            return self;
        }
        if alpha <= 0.0 {
            return under;
        }

        let top: LinSrgb = self.to_srgb().into_linear();
        let bottom: LinSrgb = under.to_srgb().into_linear();
        let mixed = bottom.mix(top, alpha);
        Rgb::from_srgb(Srgb::from_linear(mixed))
    }

    fn to_srgb(self) -> Srgb {
        Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn from_srgb(srgb: Srgb) -> Self {
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn gray() -> Self {
        Self::rgb(142, 142, 147)
    }

    /// Same color with its alpha replaced.
    pub fn alpha(self, a: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a },
            Self::Rgb { r, g, b } => {
                let oklch: Oklch = Rgb::new(r, g, b).to_srgb().into_color();
                Self::Oklch {
                    l: oklch.l,
                    c: oklch.chroma,
                    h: oklch.hue.into_positive_degrees(),
                    a,
                }
            }
        }
    }

    pub fn alpha_value(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } => *a,
            Self::Rgb { .. } => 1.0,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    Rgb::from_srgb(srgb.clamp())
}

use anyhow::{anyhow, Result};
use image::{GrayImage, ImageBuffer, Luma, RgbaImage};
use imageproc::region_labelling::{connected_components, Connectivity};

pub const DEFAULT_DARK_THRESHOLD: u8 = 120;
pub const DEFAULT_MIN_REGION_PIXELS: u32 = 100;
pub const DEFAULT_REGION_CAP: u32 = 200;

const MASK_SET: Luma<u8> = Luma([255]);
const MASK_CLEAR: Luma<u8> = Luma([0]);

/// Exclusive range that both the width and height of a slot must fall in
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct SizeBounds {
    pub lower: u32,
    pub upper: u32,
}

impl SizeBounds {
    pub fn contains(&self, value: u32) -> bool {
        self.lower < value && value < self.upper
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self{ lower: 12, upper: 22 }
    }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct DetectParams {
    /// A pixel is dark if the mean of its red/green/blue channels is below this
    pub dark_threshold: u8,
    /// Regions with this many pixels or fewer are noise
    pub min_region_pixels: u32,
    pub size_bounds: SizeBounds,
    /// Only labels below this value are considered; `None` considers all
    pub region_cap: Option<u32>,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self{
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            min_region_pixels: DEFAULT_MIN_REGION_PIXELS,
            size_bounds: SizeBounds::default(),
            region_cap: Some(DEFAULT_REGION_CAP),
        }
    }
}

impl DetectParams {
    /// Settings used when looking up container menu coordinates; every label
    /// is considered
    pub fn menu_preset() -> Self {
        Self{ dark_threshold: 130, min_region_pixels: 80, region_cap: None, ..Self::default() }
    }

    /// Applies explicitly requested values on top of a preset
    pub fn with_overrides(mut self, overrides: &ParamOverrides) -> Result<Self> {
        if let Some(threshold) = overrides.dark_threshold { self.dark_threshold = threshold; }
        if let Some(min_pixels) = overrides.min_region_pixels { self.min_region_pixels = min_pixels; }
        if let Some(lower) = overrides.min_size { self.size_bounds.lower = lower; }
        if let Some(upper) = overrides.max_size { self.size_bounds.upper = upper; }
        match (overrides.region_cap, overrides.no_region_cap) {
            (Some(_), true) => { return Err(anyhow!("a region cap cannot be combined with disabling the cap")); },
            (Some(cap), false) => { self.region_cap = Some(cap); },
            (None, true) => { self.region_cap = None; },
            (None, false) => { },
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let bounds = &self.size_bounds;
        if bounds.upper <= bounds.lower.saturating_add(1) {
            return Err(anyhow!("size bounds ({}, {}) admit no slot size", bounds.lower, bounds.upper));
        }
        Ok(())
    }
}

/// Values given on the command line; `None` keeps the preset's value
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct ParamOverrides {
    pub dark_threshold: Option<u8>,
    pub min_region_pixels: Option<u32>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub region_cap: Option<u32>,
    pub no_region_cap: bool,
}

/// A dark, roughly square region that looks like an item slot
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct SlotCandidate {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
    pub pixels: u32,
}

impl SlotCandidate {
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    pub fn center_x(&self) -> u32 {
        (self.x_min + self.x_max) / 2
    }

    pub fn center_y(&self) -> u32 {
        (self.y_min + self.y_max) / 2
    }
}

#[derive(Clone,Copy)]
struct Region {
    x_min: u32,
    y_min: u32,
    x_max: u32,
    y_max: u32,
    pixels: u32,
}

impl Region {
    fn empty() -> Self {
        Self{ x_min: u32::MAX, y_min: u32::MAX, x_max: 0, y_max: 0, pixels: 0 }
    }

    fn add(&mut self, x: u32, y: u32) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
        self.pixels += 1;
    }
}

pub fn dark_mask(image: &RgbaImage, threshold: u8) -> GrayImage {
    let limit = 3 * threshold as u32;
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        if (r as u32 + g as u32 + b as u32) < limit { MASK_SET } else { MASK_CLEAR }
    })
}

/// Returns the extent of every labelled region; index n holds label n + 1
fn measure_regions(labels: &ImageBuffer<Luma<u32>, Vec<u32>>) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let label = label.0[0] as usize;
        if label == 0 { continue; }
        if label > regions.len() {
            regions.resize(label, Region::empty());
        }
        regions[label - 1].add(x, y);
    }
    regions
}

/// Finds slot-like dark regions, returned top-to-bottom then left-to-right
pub fn detect_slots(image: &RgbaImage, params: &DetectParams) -> Vec<SlotCandidate> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let mask = dark_mask(image, params.dark_threshold);
    let labels = connected_components(&mask, Connectivity::Four, MASK_CLEAR);
    let regions = measure_regions(&labels);
    log::debug!("{} dark regions below threshold {}", regions.len(), params.dark_threshold);

    let considered = match params.region_cap {
        Some(cap) => (cap.saturating_sub(1) as usize).min(regions.len()),
        None => regions.len(),
    };
    if considered < regions.len() {
        log::warn!("region cap {:?} reached: ignoring {} of {} dark regions",
            params.region_cap, regions.len() - considered, regions.len());
    }

    let mut slots: Vec<SlotCandidate> = regions[..considered]
        .iter()
        .filter(|r| r.pixels > params.min_region_pixels)
        .map(|r| SlotCandidate{ x_min: r.x_min, y_min: r.y_min, x_max: r.x_max, y_max: r.y_max, pixels: r.pixels })
        .filter(|s| {
            let fits = params.size_bounds.contains(s.width()) && params.size_bounds.contains(s.height());
            if !fits {
                log::debug!("rejecting {}x{} region at ({}, {})", s.width(), s.height(), s.x_min, s.y_min);
            }
            fits
        })
        .collect();

    slots.sort_by_key(|s| (s.y_min, s.x_min));
    slots
}

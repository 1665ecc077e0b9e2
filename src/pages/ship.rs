//! The starship shown on the launch station, moon and mars scenes.
//!
//! Each scene mounts a [`ShipRig`]. The rig starts out `Loading` and renders
//! the procedural ship until the optional model file has been read; a
//! failed read settles on the procedural ship for the rest of the mount.
//! Tilt and flames work the same way whichever visual is showing.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use serde_json::json;

use crate::core::page::MissionError;

/// Magic bytes at the start of a binary glTF file
const GLB_MAGIC: &[u8; 4] = b"glTF";
/// Roll applied while a tilt key is held, in radians
pub const TILT_ROLL: f64 = 0.3;

/// Source of the optional ship model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Read the model at `path`
    async fn load(&self, path: &Path) -> Result<Vec<u8>, MissionError>;
}

/// Reads models from the local filesystem
#[derive(Debug, Default, Clone)]
pub struct FsAssetLoader;

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn load(&self, path: &Path) -> Result<Vec<u8>, MissionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MissionError::AssetLoad(format!("{}: {}", path.display(), e)))?;

        if !bytes.starts_with(GLB_MAGIC) {
            return Err(MissionError::AssetLoad(format!(
                "{}: not a binary glTF model",
                path.display()
            )));
        }
        Ok(bytes)
    }
}

/// Which ship gets drawn
#[derive(Debug, Clone, PartialEq)]
pub enum ShipVisual {
    /// The model file loaded successfully
    PrimaryAsset { path: PathBuf, bytes: Vec<u8> },
    /// Built-in procedural ship
    ProceduralFallback,
}

impl ShipVisual {
    /// Turn a load result into a visual. Failures are logged and replaced
    /// by the procedural ship.
    pub fn resolve(path: &Path, result: Result<Vec<u8>, MissionError>) -> Self {
        match result {
            Ok(bytes) => {
                info!("Loaded ship model {} ({} bytes)", path.display(), bytes.len());
                ShipVisual::PrimaryAsset {
                    path: path.to_path_buf(),
                    bytes,
                }
            }
            Err(e) => {
                warn!("{}, using procedural fallback", e);
                ShipVisual::ProceduralFallback
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShipVisual::PrimaryAsset { .. } => "primary_asset",
            ShipVisual::ProceduralFallback => "procedural_fallback",
        }
    }
}

/// Visual resolution state of a rig
#[derive(Debug, Clone, PartialEq)]
pub enum VisualSlot {
    Loading,
    Ready(ShipVisual),
}

/// Flame transform for one animation frame
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FlameFrame {
    /// Uniform scale pulse
    pub pulse: f64,
    /// Extra vertical stretch
    pub stretch: f64,
    /// Emissive intensity
    pub intensity: f64,
}

impl FlameFrame {
    /// Frame at `t` seconds with the given flicker in `[0.9, 1.0)`
    pub fn at(t: f64, flicker: f64) -> Self {
        Self {
            pulse: (t * 3.0).sin() * 0.1 + 1.0,
            stretch: 0.8 + (t * 5.0).sin() * 0.2,
            intensity: 0.8 * flicker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TiltKey {
    Left,
    Right,
}

impl TiltKey {
    fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "a" | "arrowleft" => Some(TiltKey::Left),
            "d" | "arrowright" => Some(TiltKey::Right),
            _ => None,
        }
    }
}

/// Ship state shared by every scene page
#[derive(Debug, Clone)]
pub struct ShipRig {
    visual: VisualSlot,
    left_held: bool,
    right_held: bool,
    flames: bool,
}

impl ShipRig {
    pub fn new(flames: bool) -> Self {
        Self {
            visual: VisualSlot::Loading,
            left_held: false,
            right_held: false,
            flames,
        }
    }

    /// Apply a key press or release. Returns false for keys the rig ignores.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match TiltKey::parse(key) {
            Some(TiltKey::Left) => self.left_held = pressed,
            Some(TiltKey::Right) => self.right_held = pressed,
            None => return false,
        }
        true
    }

    /// Current roll; left wins when both keys are held
    pub fn roll(&self) -> f64 {
        if self.left_held {
            TILT_ROLL
        } else if self.right_held {
            -TILT_ROLL
        } else {
            0.0
        }
    }

    pub fn set_flames(&mut self, on: bool) {
        self.flames = on;
    }

    pub fn flames(&self) -> bool {
        self.flames
    }

    /// Flame transform at `t` seconds, or `None` while flames are off
    pub fn flame_frame(&self, t: f64) -> Option<FlameFrame> {
        if !self.flames {
            return None;
        }
        let flicker = rand::thread_rng().gen_range(0.9..1.0);
        Some(FlameFrame::at(t, flicker))
    }

    pub fn set_visual(&mut self, visual: ShipVisual) {
        self.visual = VisualSlot::Ready(visual);
    }

    pub fn visual(&self) -> &VisualSlot {
        &self.visual
    }

    /// What is drawn right now. A rig still loading draws the procedural ship.
    pub fn rendered(&self) -> &'static str {
        match &self.visual {
            VisualSlot::Ready(visual) => visual.label(),
            VisualSlot::Loading => ShipVisual::ProceduralFallback.label(),
        }
    }

    /// Template context at `t` seconds since mount
    pub fn context(&self, t: f64) -> serde_json::Value {
        json!({
            "loading": self.visual == VisualSlot::Loading,
            "visual": self.rendered(),
            "roll": self.roll(),
            "flames": self.flame_frame(t),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_keys() {
        let mut rig = ShipRig::new(false);
        assert_eq!(rig.roll(), 0.0);

        assert!(rig.key_event("ArrowLeft", true));
        assert_eq!(rig.roll(), TILT_ROLL);

        assert!(rig.key_event("D", true));
        assert_eq!(rig.roll(), TILT_ROLL, "left wins while both are held");

        rig.key_event("arrowleft", false);
        assert_eq!(rig.roll(), -TILT_ROLL);

        rig.key_event("d", false);
        assert_eq!(rig.roll(), 0.0);

        assert!(!rig.key_event("w", true));
    }

    #[test]
    fn test_flame_frame_bounds() {
        let mut rig = ShipRig::new(false);
        assert!(rig.flame_frame(1.0).is_none());

        rig.set_flames(true);
        for step in 0..100 {
            let frame = rig.flame_frame(step as f64 * 0.05).unwrap();
            assert!(frame.pulse >= 0.9 && frame.pulse <= 1.1);
            assert!(frame.stretch >= 0.6 && frame.stretch <= 1.0);
            assert!(frame.intensity >= 0.72 && frame.intensity < 0.8);
        }
    }

    #[test]
    fn test_flame_frame_at_zero() {
        let frame = FlameFrame::at(0.0, 0.95);
        assert_eq!(frame.pulse, 1.0);
        assert_eq!(frame.stretch, 0.8);
        assert!((frame.intensity - 0.76).abs() < 1e-9);
    }

    #[test]
    fn test_loading_renders_procedural() {
        let mut rig = ShipRig::new(true);
        assert_eq!(rig.rendered(), "procedural_fallback");

        rig.set_visual(ShipVisual::PrimaryAsset {
            path: PathBuf::from("starship.glb"),
            bytes: b"glTF\x02\x00\x00\x00".to_vec(),
        });
        assert_eq!(rig.rendered(), "primary_asset");
    }

    #[test]
    fn test_failed_load_resolves_to_fallback() {
        let visual = ShipVisual::resolve(
            Path::new("missing.glb"),
            Err(MissionError::AssetLoad("missing.glb: not found".to_string())),
        );
        assert_eq!(visual, ShipVisual::ProceduralFallback);

        let mut rig = ShipRig::new(true);
        rig.set_visual(visual);
        rig.key_event("a", true);
        assert_eq!(rig.roll(), TILT_ROLL);
        assert!(rig.flame_frame(0.5).is_some());
    }

    #[tokio::test]
    async fn test_fs_loader_rejects_non_glb() {
        let path = std::env::temp_dir().join(format!("ship-{}.glb", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, b"not a model").await.unwrap();

        let result = FsAssetLoader.load(&path).await;
        assert!(matches!(result, Err(MissionError::AssetLoad(_))));

        tokio::fs::write(&path, b"glTF\x02\x00\x00\x00").await.unwrap();
        assert!(FsAssetLoader.load(&path).await.is_ok());

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_fs_loader_missing_file() {
        let result = FsAssetLoader.load(Path::new("./no/such/starship.glb")).await;
        assert!(matches!(result, Err(MissionError::AssetLoad(_))));
    }
}

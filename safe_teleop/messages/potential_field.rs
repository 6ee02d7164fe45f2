use serde::{Deserialize, Serialize};

/// Obstacle repulsion vector from the potential-field computation
///
/// 2D push-away vector in the same frame as the fused drive/turn output:
/// `x` along the forward axis, `y` along the turn axis. A zero vector means
/// "no push" and is a valid reading; it is not the same as never having
/// received a field, which the arbiter tracks separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct PotentialField {
    pub stamp_nanos: u64,
    pub x: f32,
    pub y: f32,
}

impl PotentialField {
    /// Create a new field vector stamped with the current time
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            x,
            y,
        }
    }

    /// Zero-magnitude field (no obstacles pushing)
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Create a field vector with an explicit timestamp
    pub fn with_timestamp(x: f32, y: f32, stamp_nanos: u64) -> Self {
        Self { stamp_nanos, x, y }
    }

    /// Euclidean magnitude of the push vector
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Default for PotentialField {
    fn default() -> Self {
        Self::zero()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for PotentialField {}
unsafe impl bytemuck::Zeroable for PotentialField {}

//! Cubic networks shaped by a voxel image.
//!
//! Each voxel becomes a pore at its integer grid position (scaled by the
//! configured spacing) and face-adjacent voxels are joined by throats. The
//! voxel values are kept as `pore.values` so a solid/void template can be
//! used to label or trim the network afterwards.

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::{Network, NetworkError};

/// A dense 3-D array of voxel values in row-major order (last axis fastest).
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelImage {
    shape: [usize; 3],
    values: Vec<f64>,
}

impl VoxelImage {
    /// Creates an image from its shape and row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::EmptyImage`] if any axis is zero, or
    /// [`NetworkError::ShapeMismatch`] if the value count does not match.
    pub fn new(shape: [usize; 3], values: Vec<f64>) -> Result<Self, NetworkError> {
        let expected: usize = shape.iter().product();
        if expected == 0 {
            return Err(NetworkError::EmptyImage);
        }
        if values.len() != expected {
            return Err(NetworkError::ShapeMismatch {
                shape,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// Creates a one-voxel-deep image from a 2-D array.
    ///
    /// # Errors
    ///
    /// Same as [`VoxelImage::new`].
    pub fn planar(shape: [usize; 2], values: Vec<f64>) -> Result<Self, NetworkError> {
        Self::new([shape[0], shape[1], 1], values)
    }

    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Row-major index of voxel `(i, j, k)`.
    #[must_use]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let [_, ny, nz] = self.shape;
        (i * ny + j) * nz + k
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.values[self.index(i, j, k)]
    }
}

/// Settings for [`Template::generate`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateConfig {
    /// Distance between neighboring pore centers.
    pub spacing: Constrained<f64, StrictlyPositive>,
}

impl TemplateConfig {
    /// Creates a configuration with the given lattice spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is not strictly positive.
    pub fn with_spacing(spacing: f64) -> Result<Self, ConstraintError> {
        Ok(Self {
            spacing: StrictlyPositive::new(spacing)?,
        })
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            spacing: StrictlyPositive::one(),
        }
    }
}

/// Face labels assigned by [`Template::generate`], with the axis they
/// describe and whether they mark the minimum or maximum coordinate.
const FACES: [(&str, usize, bool); 6] = [
    ("pore.left", 0, false),
    ("pore.right", 0, true),
    ("pore.top", 1, false),
    ("pore.bottom", 1, true),
    ("pore.front", 2, false),
    ("pore.back", 2, true),
];

/// Generator for cubic networks with an arbitrary domain shape.
pub struct Template;

impl Template {
    /// Builds a network with one pore per voxel.
    ///
    /// Throats join face-adjacent voxels, added along the last axis first,
    /// then the middle, then the first. Pores on each face of the bounding
    /// box are labeled `left`/`right` (first axis), `top`/`bottom` (second
    /// axis), and `front`/`back` (third axis).
    ///
    /// ```
    /// use pnm_models::network::{Template, TemplateConfig, VoxelImage};
    ///
    /// let image = VoxelImage::planar([2, 3], vec![1.0; 6]).unwrap();
    /// let net = Template::generate("slab", &image, TemplateConfig::default()).unwrap();
    /// assert_eq!(net.pore_count(), 6);
    /// assert_eq!(net.throat_count(), 7);
    /// assert_eq!(net.labeled("pore.left").unwrap(), vec![0, 1, 2]);
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates [`NetworkError`] from network construction.
    pub fn generate(
        name: impl Into<String>,
        image: &VoxelImage,
        config: TemplateConfig,
    ) -> Result<Network, NetworkError> {
        let [nx, ny, nz] = image.shape();
        let spacing = config.spacing.into_inner();

        let mut coords = Vec::with_capacity(image.values().len());
        for i in 0..nx {
            for j in 0..ny {
                for k in 0..nz {
                    coords.push([i as f64 * spacing, j as f64 * spacing, k as f64 * spacing]);
                }
            }
        }

        let mut conns = Vec::new();
        for i in 0..nx {
            for j in 0..ny {
                for k in 1..nz {
                    conns.push([image.index(i, j, k - 1), image.index(i, j, k)]);
                }
            }
        }
        for i in 0..nx {
            for j in 1..ny {
                for k in 0..nz {
                    conns.push([image.index(i, j - 1, k), image.index(i, j, k)]);
                }
            }
        }
        for i in 1..nx {
            for j in 0..ny {
                for k in 0..nz {
                    conns.push([image.index(i - 1, j, k), image.index(i, j, k)]);
                }
            }
        }

        let extents = [nx, ny, nz];
        let mut network = Network::new(name, coords, conns)?;
        for (label, axis, at_max) in FACES {
            let target = if at_max { extents[axis] - 1 } else { 0 };
            let mask = (0..nx)
                .flat_map(|i| (0..ny).flat_map(move |j| (0..nz).map(move |k| [i, j, k])))
                .map(|index| index[axis] == target)
                .collect();
            network.set_label(label, mask)?;
        }
        network
            .properties_mut()
            .insert("pore.values", image.values().to_vec());

        Ok(network)
    }

    /// Reconstitutes a dense image from a network's pore coordinates.
    ///
    /// The grid resolution along each axis is the number of distinct
    /// coordinates, and each pore is placed by rounding its position within
    /// the bounding box. `values` defaults to the pore indices. Grid cells
    /// without a pore are zero.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::EmptyImage`] for a network without pores, or
    /// [`NetworkError::ShapeMismatch`] if `values` is not one per pore.
    pub fn to_voxels(network: &Network, values: Option<&[f64]>) -> Result<VoxelImage, NetworkError> {
        let coords = network.coords();
        if coords.is_empty() {
            return Err(NetworkError::EmptyImage);
        }

        let mut shape = [0; 3];
        let mut min = [0.0; 3];
        let mut span = [0.0; 3];
        for axis in 0..3 {
            let mut distinct: Vec<f64> = coords.iter().map(|c| c[axis]).collect();
            distinct.sort_by(f64::total_cmp);
            distinct.dedup();
            shape[axis] = distinct.len();
            min[axis] = distinct[0];
            let extent = distinct[distinct.len() - 1] - distinct[0];
            span[axis] = if extent == 0.0 { 1.0 } else { extent };
        }

        let default_values: Vec<f64>;
        let values = match values {
            Some(values) => values,
            None => {
                default_values = (0..coords.len()).map(|p| p as f64).collect();
                &default_values
            }
        };
        if values.len() != coords.len() {
            return Err(NetworkError::ShapeMismatch {
                shape,
                expected: coords.len(),
                actual: values.len(),
            });
        }

        let mut image = VoxelImage::new(shape, vec![0.0; shape.iter().product()])?;
        for (coord, &value) in coords.iter().zip(values) {
            let mut index = [0; 3];
            for axis in 0..3 {
                let relative = (coord[axis] - min[axis]) / span[axis] * (shape[axis] - 1) as f64;
                index[axis] = (relative.round() as usize).min(shape[axis] - 1);
            }
            let flat = image.index(index[0], index[1], index[2]);
            image.values[flat] = value;
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cube(n: usize) -> VoxelImage {
        let values = (0..n * n * n).map(|v| v as f64).collect();
        VoxelImage::new([n, n, n], values).unwrap()
    }

    #[test]
    fn lattice_counts() {
        let net = Template::generate("cube", &cube(3), TemplateConfig::default()).unwrap();
        assert_eq!(net.pore_count(), 27);
        // 3 axes x 3 x 3 rows x 2 links per row.
        assert_eq!(net.throat_count(), 54);
    }

    #[test]
    fn throats_follow_last_axis_first() {
        let net = Template::generate("cube", &cube(2), TemplateConfig::default()).unwrap();
        assert_eq!(net.conns()[0], [0, 1]);
        assert_eq!(net.conns()[4], [0, 2]);
        assert_eq!(net.conns()[8], [0, 4]);
    }

    #[test]
    fn face_labels() {
        let net = Template::generate("cube", &cube(2), TemplateConfig::default()).unwrap();
        assert_eq!(net.labeled("pore.left").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(net.labeled("pore.right").unwrap(), vec![4, 5, 6, 7]);
        assert_eq!(net.labeled("pore.top").unwrap(), vec![0, 1, 4, 5]);
        assert_eq!(net.labeled("pore.back").unwrap(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn planar_images_are_one_voxel_deep() {
        let image = VoxelImage::planar([2, 2], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let net = Template::generate("slab", &image, TemplateConfig::default()).unwrap();
        assert_eq!(net.labeled("pore.front").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(net.labeled("pore.back").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            net.properties().values("pore.values").unwrap(),
            &[0.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn spacing_scales_coordinates() {
        let config = TemplateConfig::with_spacing(2.5e-5).unwrap();
        let net = Template::generate("cube", &cube(2), config).unwrap();
        assert_relative_eq!(net.center_distance(0, 7), 2.5e-5 * 3f64.sqrt());
        assert!(TemplateConfig::with_spacing(0.0).is_err());
    }

    #[test]
    fn voxels_round_trip() {
        let image = cube(3);
        let net = Template::generate("cube", &image, TemplateConfig::with_spacing(0.5).unwrap()).unwrap();
        let rebuilt =
            Template::to_voxels(&net, Some(net.properties().values("pore.values").unwrap())).unwrap();
        assert_eq!(rebuilt, image);

        let indices = Template::to_voxels(&net, None).unwrap();
        assert_eq!(indices.get(2, 1, 0), image.index(2, 1, 0) as f64);
    }

    #[test]
    fn malformed_images() {
        assert_eq!(VoxelImage::new([0, 2, 2], vec![]), Err(NetworkError::EmptyImage));
        assert!(matches!(
            VoxelImage::new([2, 2, 2], vec![0.0; 7]),
            Err(NetworkError::ShapeMismatch { expected: 8, actual: 7, .. })
        ));
    }
}

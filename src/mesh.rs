//! Triangle lists fed to the renderer.
//!
//! A [`Mesh`] is just a named list of [`WorldTriangle`]s in its own local
//! space. Placement happens at draw time (see `Engine::draw_instance`).

use std::path::Path;

use crate::error::LoadError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::WorldTriangle;

#[derive(Debug, Clone, Default)]
pub struct Mesh {
    name: String,
    triangles: Vec<WorldTriangle>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<WorldTriangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Loads every model in an OBJ file into one triangle list.
    ///
    /// Faces are triangulated, positions are multiplied by `scale`, and the
    /// V texture coordinate is flipped because OBJ puts its origin at the
    /// bottom-left while textures are stored top-left.
    pub fn from_obj<P: AsRef<Path>>(path: P, scale: f64) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| LoadError::Obj {
            path: path.to_path_buf(),
            source,
        })?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            if mesh.texcoords.is_empty() {
                return Err(LoadError::MissingTexCoords {
                    path: path.to_path_buf(),
                    model: model.name.clone(),
                });
            }

            let position = |i: u32| {
                let i = i as usize * 3;
                Vec3::new(
                    mesh.positions[i] as f64,
                    mesh.positions[i + 1] as f64,
                    mesh.positions[i + 2] as f64,
                ) * scale
            };
            let tex_coord = |i: u32| {
                let i = i as usize * 2;
                Vec2::new(mesh.texcoords[i] as f64, 1.0 - mesh.texcoords[i + 1] as f64)
            };

            for face in mesh.indices.chunks_exact(3) {
                triangles.push(WorldTriangle::new(
                    [position(face[0]), position(face[1]), position(face[2])],
                    [tex_coord(face[0]), tex_coord(face[1]), tex_coord(face[2])],
                ));
            }
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!(
            "loaded mesh {} ({} models, {} triangles)",
            path.display(),
            models.len(),
            triangles.len()
        );
        Ok(Self::new(name, triangles))
    }

    /// Axis-aligned cube centred on the origin, every face mapped to the full texture.
    pub fn cube(half_extent: f64) -> Self {
        let c = |x: f64, y: f64, z: f64| Vec3::new(x, y, z) * half_extent;
        // Four corners per face: bottom-left, bottom-right, top-right, top-left
        // as seen from outside, with "top" toward +Z on the side faces.
        let faces = [
            [c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.), c(1., -1., 1.)],
            [c(-1., 1., -1.), c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.)],
            [c(1., 1., -1.), c(-1., 1., -1.), c(-1., 1., 1.), c(1., 1., 1.)],
            [c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.)],
            [c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.)],
            [c(-1., 1., -1.), c(1., 1., -1.), c(1., -1., -1.), c(-1., -1., -1.)],
        ];
        let uv = [
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];

        let triangles = faces
            .iter()
            .flat_map(|q| {
                [
                    WorldTriangle::new([q[0], q[1], q[2]], [uv[0], uv[1], uv[2]]),
                    WorldTriangle::new([q[0], q[2], q[3]], [uv[0], uv[2], uv[3]]),
                ]
            })
            .collect();
        Self::new("cube", triangles)
    }

    /// Vertical quad in the local y-z plane, facing -X.
    ///
    /// Drawn with a heading equal to the camera's look azimuth it always
    /// faces the viewer. `height_offset` lifts its centre above the origin.
    pub fn upright_quad(half_width: f64, half_height: f64, height_offset: f64) -> Self {
        let bottom = height_offset - half_height;
        let top = height_offset + half_height;
        // Screen right is local -Y when looking along +X.
        let bottom_left = Vec3::new(0.0, half_width, bottom);
        let top_left = Vec3::new(0.0, half_width, top);
        let top_right = Vec3::new(0.0, -half_width, top);
        let bottom_right = Vec3::new(0.0, -half_width, bottom);

        Self::new(
            "upright_quad",
            vec![
                WorldTriangle::new(
                    [bottom_left, top_left, bottom_right],
                    [Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
                ),
                WorldTriangle::new(
                    [top_left, top_right, bottom_right],
                    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
                ),
            ],
        )
    }

    /// Horizontal quad at height `z`, spanning `±half_x` by `±half_y`.
    ///
    /// Texture U runs along +Y and V along +X.
    pub fn ground_quad(half_x: f64, half_y: f64, z: f64) -> Self {
        let p = |x: f64, y: f64| Vec3::new(x * half_x, y * half_y, z);
        Self::new(
            "ground_quad",
            vec![
                WorldTriangle::new(
                    [p(-1.0, -1.0), p(1.0, 1.0), p(1.0, -1.0)],
                    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
                ),
                WorldTriangle::new(
                    [p(-1.0, -1.0), p(-1.0, 1.0), p(1.0, 1.0)],
                    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
                ),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[WorldTriangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

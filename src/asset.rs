use hedron::MeshData;

/// Turns finished [MeshData] into whatever the renderer draws; e.g. an asset registry which
/// uploads the data and hands back a handle.
pub trait MeshFactory {
    /// Identifier under which a generated mesh is registered.
    type Id;
    /// Handle to a generated mesh.
    type Mesh;

    /// Build a mesh from `data`, registering it under `id` if one is given.
    fn generate(&mut self, id: Option<Self::Id>, data: MeshData) -> Self::Mesh;
}

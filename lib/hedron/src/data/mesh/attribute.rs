use nalgebra::{Point2, Point3, Point4, Vector3};

/// The meaning of a vertex attribute channel within a [MeshData](crate::MeshData).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Normal,
    Texcoord(u32),
    Color(u32),
    /// Baked per-vertex light, RGB.
    Light(u32),
}

impl AttributeUsage {
    /// The per-vertex width of channels with this usage.
    pub const fn attr_type(self) -> AttributeType {
        match self {
            AttributeUsage::Position => AttributeType::Vec3,
            AttributeUsage::Normal => AttributeType::Vec3,
            AttributeUsage::Texcoord(_) => AttributeType::Vec2,
            AttributeUsage::Color(_) => AttributeType::Vec4,
            AttributeUsage::Light(_) => AttributeType::Vec3,
        }
    }
}

/// The inner components of an [AttributeType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeComponent {
    U32,
    F32,
}

impl AttributeComponent {
    pub const fn alignment(self) -> usize {
        use std::mem::align_of;
        match self {
            AttributeComponent::U32 => align_of::<u32>(),
            AttributeComponent::F32 => align_of::<f32>(),
        }
    }

    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::U32 => size_of::<u32>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }
}

/// The shape of a single element stored in a [Channel](crate::Channel).
///
/// Values taken from the [glTF specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    #[inline]
    pub const fn alignment(self, comp: AttributeComponent) -> usize {
        // arrays have the same alignment as their component type
        comp.alignment()
    }

    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Scalar => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    pub const fn size_bytes(self, comp: AttributeComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

pub trait AttributeComponentType: Copy + Default + PartialEq + std::fmt::Debug + 'static {
    const COMPONENT: AttributeComponent;
}

impl AttributeComponentType for u32 {
    const COMPONENT: AttributeComponent = AttributeComponent::U32;
}

impl AttributeComponentType for f32 {
    const COMPONENT: AttributeComponent = AttributeComponent::F32;
}

/// Trait for value types which can be written to and read from a [Channel](crate::Channel).
///
/// Implementing types are laid out as `TYPE.size_elements()` contiguous components.
pub trait Attribute: Copy {
    const TYPE: AttributeType;
    type Component: AttributeComponentType;

    /// The components of this value, in channel order.
    fn components(&self) -> &[Self::Component];

    /// Reassemble a value from exactly `TYPE.size_elements()` components.
    ///
    /// # Panics
    ///
    /// * if `comps.len() != Self::TYPE.size_elements()`
    fn from_components(comps: &[Self::Component]) -> Self;
}

mod _impl_attr {
    use super::{Attribute, AttributeComponent, AttributeType};

    macro_rules! impl_attr {
        (vector $t:ident => $Target:ty) => {
            impl_attr!(@assert $t => $Target);
            impl Attribute for $Target {
                const TYPE: AttributeType = AttributeType::$t;
                type Component = f32;
                #[inline]
                fn components(&self) -> &[f32] {
                    self.as_slice()
                }
                #[inline]
                fn from_components(comps: &[f32]) -> Self {
                    assert_eq!(comps.len(), Self::TYPE.size_elements());
                    <$Target>::from_column_slice(comps)
                }
            }
        };
        (point $t:ident => $Target:ty) => {
            impl_attr!(@assert $t => $Target);
            impl Attribute for $Target {
                const TYPE: AttributeType = AttributeType::$t;
                type Component = f32;
                #[inline]
                fn components(&self) -> &[f32] {
                    self.coords.as_slice()
                }
                #[inline]
                fn from_components(comps: &[f32]) -> Self {
                    assert_eq!(comps.len(), Self::TYPE.size_elements());
                    <$Target>::from_slice(comps)
                }
            }
        };
        (@assert $t:ident => $Target:ty) => {
            // "size of type $Target == size of attribute $t with f32 components"
            static_assertions::const_assert_eq!(
                std::mem::size_of::<$Target>(),
                AttributeType::$t.size_bytes(AttributeComponent::F32)
            );
            static_assertions::const_assert_eq!(
                std::mem::align_of::<$Target>(),
                AttributeType::$t.alignment(AttributeComponent::F32)
            );
        };
    }

    impl_attr!(vector Vec2 => nalgebra::Vector2<f32>);
    impl_attr!(vector Vec3 => nalgebra::Vector3<f32>);
    impl_attr!(vector Vec4 => nalgebra::Vector4<f32>);

    impl_attr!(point Vec2 => nalgebra::Point2<f32>);
    impl_attr!(point Vec3 => nalgebra::Point3<f32>);
    impl_attr!(point Vec4 => nalgebra::Point4<f32>);
}

impl Attribute for f32 {
    const TYPE: AttributeType = AttributeType::Scalar;
    type Component = f32;
    #[inline]
    fn components(&self) -> &[f32] {
        std::slice::from_ref(self)
    }
    #[inline]
    fn from_components(comps: &[f32]) -> Self {
        assert_eq!(comps.len(), 1);
        comps[0]
    }
}

impl Attribute for u32 {
    const TYPE: AttributeType = AttributeType::Scalar;
    type Component = u32;
    #[inline]
    fn components(&self) -> &[u32] {
        std::slice::from_ref(self)
    }
    #[inline]
    fn from_components(comps: &[u32]) -> Self {
        assert_eq!(comps.len(), 1);
        comps[0]
    }
}

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;

pub type Texcoord = Point2<f32>;
pub type Rgb = Point3<f32>;
pub type Rgba = Point4<f32>;

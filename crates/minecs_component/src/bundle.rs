//! Component bundles: the variadic component lists entities are built from.

use crate::component::{Component, ErasedComponent};

/// A set of components handed to entity construction in one go.
///
/// Implemented for `()`, tuples of up to eight components, and
/// `Vec<Box<dyn ErasedComponent>>` for lists assembled at runtime. A single
/// component is passed as a one-element tuple: `(Position::new(0.0, 0.0),)`.
pub trait Bundle {
    /// Box every component in the bundle, in order.
    fn into_components(self) -> Vec<Box<dyn ErasedComponent>>;
}

impl Bundle for Vec<Box<dyn ErasedComponent>> {
    fn into_components(self) -> Vec<Box<dyn ErasedComponent>> {
        self
    }
}

macro_rules! impl_bundle_for_tuple {
    ($($name:ident),*) => {
        impl<$($name: Component),*> Bundle for ($($name,)*) {
            #[allow(non_snake_case)]
            fn into_components(self) -> Vec<Box<dyn ErasedComponent>> {
                let ($($name,)*) = self;
                vec![$(Box::new($name) as Box<dyn ErasedComponent>),*]
            }
        }
    };
}

impl_bundle_for_tuple!();
impl_bundle_for_tuple!(A);
impl_bundle_for_tuple!(A, B);
impl_bundle_for_tuple!(A, B, C);
impl_bundle_for_tuple!(A, B, C, D);
impl_bundle_for_tuple!(A, B, C, D, E);
impl_bundle_for_tuple!(A, B, C, D, E, F);
impl_bundle_for_tuple!(A, B, C, D, E, F, G);
impl_bundle_for_tuple!(A, B, C, D, E, F, G, H);

use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};

// -----------------------------------------------------------------------------
// Reflect

/// A value that can be inspected through type-erased references.
///
/// Implemented for every `'static` type. Member metadata lives in
/// [`TypeInfo`](crate::info::TypeInfo); this trait only carries identity and
/// the upcasts needed to move between `dyn Reflect` and concrete types.
///
/// A `Box<dyn Reflect>` stored inside another value is a *dynamic slot*:
/// path access looks through it to the boxed value.
///
/// # Receivers
///
/// References and boxes are `'static` types too, so they implement this
/// trait themselves. Calling a method on `&mut dyn Reflect` or
/// `Box<dyn Reflect>` auto-references and reports the reference or box, not
/// the value behind it. Dereference first: `(*value).ty_id()`. A shared
/// `&dyn Reflect` receiver resolves to the value directly.
///
/// # Examples
///
/// ```
/// use binder_reflect::Reflect;
///
/// let value: Box<dyn Reflect> = Box::new(7_u32);
/// assert!(value.is::<u32>());
/// assert_eq!(value.downcast_ref::<u32>(), Some(&7));
/// assert_eq!(value.take::<u32>().ok(), Some(7));
/// ```
pub trait Reflect: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn as_reflect(&self) -> &dyn Reflect;

    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;

    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>;

    /// The [`TypeId`] of the concrete type behind this value.
    fn ty_id(&self) -> TypeId;

    /// The full type path, as given by [`core::any::type_name`].
    fn reflect_type_path(&self) -> &'static str;
}

impl<T: Any> Reflect for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline(always)]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        self
    }

    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect> {
        self
    }

    #[inline(always)]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[inline(always)]
    fn reflect_type_path(&self) -> &'static str {
        type_name::<T>()
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Downcasts a boxed value, handing it back unchanged on mismatch.
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match Reflect::into_any(self).downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before downcasting"),
        }
    }

    /// Unboxes the value as `T`, handing it back unchanged on mismatch.
    #[inline]
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }

    /// Follows dynamic slots (`Box<dyn Reflect>`) down to the innermost value.
    pub fn look_through(&self) -> &dyn Reflect {
        match self.downcast_ref::<Box<dyn Reflect>>() {
            Some(inner) => (**inner).look_through(),
            None => self,
        }
    }

    /// Mutable version of [`look_through`](Self::look_through).
    pub fn look_through_mut(&mut self) -> &mut dyn Reflect {
        if !self.is::<Box<dyn Reflect>>() {
            return self;
        }
        match self.downcast_mut::<Box<dyn Reflect>>() {
            Some(inner) => (**inner).look_through_mut(),
            None => unreachable!("type id was checked before downcasting"),
        }
    }
}

/// Converts a boxed value into the concrete value for a slot of type `V`.
///
/// When `V` is itself `Box<dyn Reflect>` the box is stored as is, so dynamic
/// slots accept any value.
pub(crate) fn take_value<V: Any>(value: Box<dyn Reflect>) -> Result<V, Box<dyn Reflect>> {
    let mut slot = Some(value);
    if let Some(dynamic) = (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<V>>()
        .and_then(Option::take)
    {
        return Ok(dynamic);
    }
    match slot {
        Some(value) => <dyn Reflect>::take::<V>(value),
        None => unreachable!("a dynamic slot value is always returned"),
    }
}

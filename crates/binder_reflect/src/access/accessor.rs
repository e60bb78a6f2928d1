use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, type_name};

use crate::Reflect;
use crate::access::{AccessError, EmptyValueError, MemberPath, ReadOnlyError, ResolutionError};
use crate::access::TypeMismatchError;
use crate::catalog::Member;
use crate::locate::locate;
use crate::registry::TypeRegistry;

#[cold]
fn unresolved(type_path: &'static str, index: usize, segment: &str) -> ResolutionError {
    let error = ResolutionError {
        index,
        segment: String::from(segment),
        type_path,
    };
    log::debug!("{error}");
    error
}

#[cold]
fn empty(member: &Member<'_>, index: usize) -> AccessError {
    let error = EmptyValueError {
        index,
        member: member.name(),
        type_path: member.declaring_type().type_path(),
    };
    log::debug!("{error}");
    error.into()
}

// -----------------------------------------------------------------------------
// PathAccessor

/// Resolves member paths against a [`TypeRegistry`].
///
/// String-taking methods parse the path on each call; the `*_path` variants
/// take a pre-parsed [`MemberPath`] for repeated use.
///
/// # Examples
///
/// ```
/// use binder_reflect::{derive::Reflect, access::{AccessError, PathAccessor}, registry::TypeRegistry};
///
/// #[derive(Reflect)]
/// struct Stats {
///     level: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Hero {
///     #[reflect(typed)]
///     stats: Stats,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Hero>();
/// let accessor = PathAccessor::new(&registry);
///
/// let mut hero = Hero { stats: Stats { level: 1 } };
/// accessor.set_value(&mut hero, "stats.level", 2_u32).unwrap();
/// assert_eq!(hero.stats.level, 2);
///
/// // No coercion between numeric types.
/// let err = accessor.set_value(&mut hero, "stats.level", 3_u64).unwrap_err();
/// assert!(matches!(err, AccessError::TypeMismatch(_)));
/// assert_eq!(hero.stats.level, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathAccessor<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> PathAccessor<'r> {
    #[inline]
    pub const fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub const fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Resolves `segment` on the runtime type of `value`.
    fn resolve(
        &self,
        value: &dyn Reflect,
        index: usize,
        segment: &str,
    ) -> Result<Member<'static>, ResolutionError> {
        match self
            .registry
            .get_of_value(value)
            .and_then(|info| locate(info, segment))
        {
            Some(member) => Ok(member),
            None => Err(unresolved(value.reflect_type_path(), index, segment)),
        }
    }

    /// Reads the value at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binder_reflect::{derive::Reflect, access::PathAccessor, registry::TypeRegistry};
    /// #[derive(Reflect)]
    /// struct Point { x: f32, y: f32 }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register::<Point>();
    ///
    /// let point = Point { x: 1.0, y: 2.0 };
    /// let y = PathAccessor::new(&registry).get(&point, "y").unwrap();
    /// assert_eq!(y.downcast_ref::<f32>(), Some(&2.0));
    /// ```
    #[inline]
    pub fn get<'v>(&self, root: &'v dyn Reflect, path: &str) -> Result<&'v dyn Reflect, AccessError> {
        let path = MemberPath::parse(path)?;
        self.get_path(root, &path)
    }

    pub fn get_path<'v>(
        &self,
        root: &'v dyn Reflect,
        path: &MemberPath<'_>,
    ) -> Result<&'v dyn Reflect, AccessError> {
        let (hops, last) = path.split_last();
        let current = self.walk(root, hops)?;
        let (_, value) = self.read(current, hops.len(), last)?;
        Ok(value.look_through())
    }

    /// Reads the member `segment` of `current`, without looking through
    /// the result.
    fn read<'v>(
        &self,
        current: &'v dyn Reflect,
        index: usize,
        segment: &str,
    ) -> Result<(Member<'static>, &'v dyn Reflect), AccessError> {
        let member = self.resolve(current, index, segment)?;
        match member.read(current) {
            Some(value) => Ok((member, value)),
            None => Err(unresolved(current.reflect_type_path(), index, segment).into()),
        }
    }

    /// Follows `hops` from `root`, unwrapping optional members.
    fn walk<'v>(
        &self,
        root: &'v dyn Reflect,
        hops: &[Cow<'_, str>],
    ) -> Result<&'v dyn Reflect, AccessError> {
        let mut current = root.look_through();
        for (index, segment) in hops.iter().enumerate() {
            let (member, value) = self.read(current, index, segment)?;
            current = match member.info().inner_value(value) {
                Some(next) => next.look_through(),
                None => return Err(empty(&member, index)),
            };
        }
        Ok(current)
    }

    /// Reads the value at `path` as a `T`.
    #[inline]
    pub fn get_as<'v, T: Any>(&self, root: &'v dyn Reflect, path: &str) -> Result<&'v T, AccessError> {
        let value = self.get(root, path)?;
        value.downcast_ref::<T>().ok_or(AccessError::Downcast {
            expected: type_name::<T>(),
            provided: value.reflect_type_path(),
        })
    }

    /// Mutable access to the value at `path`.
    ///
    /// Every segment, the last included, must support mutable access.
    #[inline]
    pub fn get_mut<'v>(
        &self,
        root: &'v mut dyn Reflect,
        path: &str,
    ) -> Result<&'v mut dyn Reflect, AccessError> {
        let path = MemberPath::parse(path)?;
        self.get_mut_path(root, &path)
    }

    pub fn get_mut_path<'v>(
        &self,
        root: &'v mut dyn Reflect,
        path: &MemberPath<'_>,
    ) -> Result<&'v mut dyn Reflect, AccessError> {
        let (hops, last) = path.split_last();
        let current = self.walk_mut(root, hops)?;
        let (_, value) = self.read_mut(current, hops.len(), last)?;
        Ok(value.look_through_mut())
    }

    /// Mutable version of `read`; properties without a mutable getter are
    /// read-only here.
    fn read_mut<'v>(
        &self,
        current: &'v mut dyn Reflect,
        index: usize,
        segment: &str,
    ) -> Result<(Member<'static>, &'v mut dyn Reflect), AccessError> {
        let member = self.resolve(current, index, segment)?;

        if let Some(property) = member.info().as_property()
            && !property.has_getter_mut()
        {
            let error = ReadOnlyError {
                index,
                member: member.name(),
                type_path: member.declaring_type().type_path(),
            };
            log::debug!("{error}");
            return Err(error.into());
        }

        // Deref first: on `&mut dyn Reflect` itself the call would resolve
        // to the reference type.
        let type_path = (*current).reflect_type_path();
        match member.read_mut(current) {
            Some(value) => Ok((member, value)),
            None => Err(unresolved(type_path, index, segment).into()),
        }
    }

    fn walk_mut<'v>(
        &self,
        root: &'v mut dyn Reflect,
        hops: &[Cow<'_, str>],
    ) -> Result<&'v mut dyn Reflect, AccessError> {
        let mut current = root.look_through_mut();
        for (index, segment) in hops.iter().enumerate() {
            let (member, value) = self.read_mut(current, index, segment)?;
            current = match member.info().inner_value_mut(value) {
                Some(next) => next.look_through_mut(),
                None => return Err(empty(&member, index)),
            };
        }
        Ok(current)
    }

    /// Resolves the member named by the last segment of `path`, without
    /// reading it.
    #[inline]
    pub fn member(&self, root: &dyn Reflect, path: &str) -> Result<Member<'static>, AccessError> {
        let path = MemberPath::parse(path)?;
        self.member_path(root, &path)
    }

    pub fn member_path(
        &self,
        root: &dyn Reflect,
        path: &MemberPath<'_>,
    ) -> Result<Member<'static>, AccessError> {
        let (hops, last) = path.split_last();
        let current = self.walk(root, hops)?;
        Ok(self.resolve(current, hops.len(), last)?)
    }

    /// Writes `value` to the member at `path`.
    ///
    /// The value's type must equal the member's declared type, unless the
    /// member is a `Box<dyn Reflect>` slot. Nothing is written on error.
    #[inline]
    pub fn set(
        &self,
        root: &mut dyn Reflect,
        path: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessError> {
        let path = MemberPath::parse(path)?;
        self.set_path(root, &path, value)
    }

    pub fn set_path(
        &self,
        root: &mut dyn Reflect,
        path: &MemberPath<'_>,
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessError> {
        let (hops, last) = path.split_last();
        let current = self.walk_mut(root, hops)?;

        let index = hops.len();
        let member = self.resolve(current, index, last)?;

        if !member.is_writable() {
            let error = ReadOnlyError {
                index,
                member: member.name(),
                type_path: member.declaring_type().type_path(),
            };
            log::debug!("{error}");
            return Err(error.into());
        }

        let mismatch = |provided: &dyn Reflect| TypeMismatchError {
            member: member.name(),
            expected: member.ty().path(),
            provided: provided.reflect_type_path(),
        };

        if !member.accepts(&*value) {
            let error = mismatch(&*value);
            log::debug!("{error}");
            return Err(error.into());
        }

        member
            .write(current, value)
            .map_err(|value| mismatch(&*value).into())
    }

    /// Writes a typed value; see [`set`](Self::set).
    #[inline]
    pub fn set_value<T: Reflect>(
        &self,
        root: &mut dyn Reflect,
        path: &str,
        value: T,
    ) -> Result<(), AccessError> {
        self.set(root, path, Box::new(value))
    }
}

use core::any::TypeId;
use core::fmt;

use binder_utils::TypeIdMap;
use binder_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of described types.
///
/// Path access resolves each intermediate value through this registry by
/// its runtime [`TypeId`]; unregistered types have no members.
///
/// Registering a type also registers its base chain and the types of members
/// linked with `#[reflect(typed)]`, each at most once.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use binder_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect)]
/// struct Collar { size: u8 }
///
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(typed)]
///     collar: Collar,
/// }
///
/// let mut registry = TypeRegistry::new();
/// assert!(registry.register::<Dog>());
/// assert!(!registry.register::<Dog>());
///
/// assert!(registry.contains(TypeId::of::<Collar>()));
/// assert_eq!(registry.get_with_type_name("Dog").unwrap().type_ident(), "Dog");
/// ```
pub struct TypeRegistry {
    type_info_table: TypeIdMap<&'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            type_info_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    // # Validity
    // Called once per type, right after it enters `type_info_table`.
    fn add_new_type_indices(&mut self, info: &'static TypeInfo) {
        let type_name = info.type_ident();

        if !self.ambiguous_names.contains(type_name) {
            if let Some(previous) = self.type_name_to_id.remove(type_name) {
                self.ambiguous_names.insert(type_name);
                log::warn!(
                    "type name `{type_name}` is ambiguous (`{}` and `{:?}`), use the full path",
                    info.type_path(),
                    self.type_info_table.get(&previous).map(|prev| prev.type_path()),
                );
            } else {
                self.type_name_to_id.insert(type_name, info.type_id());
            }
        }

        self.type_path_to_id.insert(info.type_path(), info.type_id());
    }

    /// Registers `T` and its dependencies.
    ///
    /// Returns `false` if `T` was already registered, in which case nothing
    /// changes.
    #[inline]
    pub fn register<T: Typed>(&mut self) -> bool {
        self.register_info(T::type_info())
    }

    /// Registers a type from its description, along with its base chain and
    /// linked member types.
    pub fn register_info(&mut self, info: &'static TypeInfo) -> bool {
        if !self.type_info_table.try_insert(info.type_id(), || info) {
            return false;
        }

        self.add_new_type_indices(info);
        log::trace!("registered type `{}`", info.type_path());

        if let Some(base) = info.base() {
            self.register_info(base.info());
        }
        for member in info.members() {
            if let Some(dependency) = member.type_info() {
                self.register_info(dependency);
            }
        }
        true
    }

    /// Registers every type annotated with `#[reflect(auto_register)]`.
    ///
    /// Returns the number of types newly registered by this call, not
    /// counting dependencies. Repeated calls are cheap.
    ///
    /// Without the `auto_register` feature this does nothing and returns `0`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use binder_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.auto_register();
    ///
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_all(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    #[inline]
    pub fn get_of<T: ?Sized + 'static>(&self) -> Option<&'static TypeInfo> {
        self.get(TypeId::of::<T>())
    }

    /// The description of the runtime type of `value`.
    #[inline]
    pub fn get_of_value(&self, value: &dyn Reflect) -> Option<&'static TypeInfo> {
        self.get(value.ty_id())
    }

    /// Looks up a type by its full path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks up a type by its short identifier.
    ///
    /// Returns `None` for unknown or ambiguous names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered types share `type_name`.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }

    /// Iterates over registered types in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> {
        self.type_info_table.values().copied()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(TypeInfo::type_path))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::info::{BaseInfo, FieldInfo, TypeInfo, TypeInfoCell, Typed};
    use core::any::TypeId;

    mod left {
        use crate::info::{TypeInfo, TypeInfoCell, Typed};

        pub struct Node;

        impl Typed for Node {
            fn type_info() -> &'static TypeInfo {
                static CELL: TypeInfoCell = TypeInfoCell::new();
                CELL.get_or_init(TypeInfo::new::<Self>)
            }
        }
    }

    mod right {
        use crate::info::{TypeInfo, TypeInfoCell, Typed};

        pub struct Node;

        impl Typed for Node {
            fn type_info() -> &'static TypeInfo {
                static CELL: TypeInfoCell = TypeInfoCell::new();
                CELL.get_or_init(TypeInfo::new::<Self>)
            }
        }
    }

    struct Base {
        id: u32,
    }

    struct Derived {
        base: Base,
    }

    impl Typed for Base {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::new::<Self>().with_member(FieldInfo::new::<Self, u32>(
                    "id",
                    |b| &b.id,
                    |b| &mut b.id,
                ))
            })
        }
    }

    impl Typed for Derived {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::new::<Self>()
                    .with_base(BaseInfo::new::<Self, Base>(|d| &d.base, |d| &mut d.base))
            })
        }
    }

    #[test]
    fn registers_base_chain_once() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Derived>());
        assert!(registry.contains(TypeId::of::<Base>()));
        assert_eq!(registry.len(), 2);

        assert!(!registry.register::<Base>());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ambiguous_names_resolve_by_path_only() {
        let mut registry = TypeRegistry::new();
        registry.register::<left::Node>();
        registry.register::<right::Node>();

        assert!(registry.is_ambiguous("Node"));
        assert!(registry.get_with_type_name("Node").is_none());

        let path = left::Node::type_info().type_path();
        let found = registry.get_with_type_path(path).unwrap();
        assert_eq!(found.type_id(), TypeId::of::<left::Node>());
    }

    #[test]
    fn lookup_by_value() {
        let mut registry = TypeRegistry::new();
        registry.register::<Base>();

        let value = Base { id: 3 };
        assert!(registry.get_of_value(&value).is_some());
        assert!(registry.get_of_value(&3_u32).is_none());
        assert!(registry.get_of::<Derived>().is_none());
    }
}

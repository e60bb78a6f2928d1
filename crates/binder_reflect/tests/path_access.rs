use binder_reflect::Reflect;
use binder_reflect::access::{AccessError, MemberPath, ParseError, PathAccessor};
use binder_reflect::derive::Reflect;
use binder_reflect::registry::TypeRegistry;

#[derive(Reflect, Clone, Debug, PartialEq)]
struct Animal {
    name: String,
}

#[derive(Reflect, Clone, Debug, PartialEq)]
struct Dog {
    #[reflect(base)]
    animal: Animal,
    age: u32,
}

#[derive(Reflect)]
#[reflect(property(name = "Label", get = Self::label))]
#[reflect(property(name = "Inner", get = Self::inner))]
struct Kennel {
    #[reflect(typed)]
    dog: Dog,
    // Declared loosely; holds any registered value.
    guest: Box<dyn Reflect>,
}

impl Kennel {
    fn label(&self) -> &String {
        &self.dog.animal.name
    }

    fn inner(&self) -> &Dog {
        &self.dog
    }
}

#[derive(Reflect)]
struct Owner {
    pet: Option<Dog>,
    spare: Option<Box<dyn Reflect>>,
}

fn rex() -> Dog {
    Dog {
        animal: Animal { name: "Rex".into() },
        age: 3,
    }
}

fn kennel() -> Kennel {
    Kennel {
        dog: rex(),
        guest: Box::new(Animal { name: "Tom".into() }),
    }
}

fn owner(pet: Option<Dog>) -> Owner {
    Owner {
        pet,
        spare: Some(Box::new(Animal { name: "Tom".into() })),
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Kennel>();
    registry.register::<Owner>();
    registry
}

#[test]
fn inherited_member_is_reachable() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);

    assert_eq!(accessor.get_as::<String>(&rex(), "name").unwrap(), "Rex");
}

#[test]
fn get_matches_manual_dereference() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let kennel = kennel();

    let age = accessor.get_as::<u32>(&kennel, "dog.age").unwrap();
    assert!(core::ptr::eq(age, &kennel.dog.age));

    let label = accessor.get_as::<String>(&kennel, "Label").unwrap();
    assert!(core::ptr::eq(label, &kennel.dog.animal.name));
}

#[test]
fn runtime_type_of_dynamic_slot_is_used() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut kennel = kennel();

    assert_eq!(accessor.get_as::<String>(&kennel, "guest.name").unwrap(), "Tom");

    // `Dog` is registered through the typed field, so the swapped value
    // still resolves.
    accessor.set_value(&mut kennel, "guest", rex()).unwrap();
    assert_eq!(accessor.get_as::<u32>(&kennel, "guest.age").unwrap(), &3);
    assert_eq!(accessor.get_as::<String>(&kennel, "guest.name").unwrap(), "Rex");
}

#[test]
fn unresolved_segment_names_the_segment() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut kennel = kennel();

    let Err(AccessError::Resolution(error)) = accessor.get(&kennel, "dog.tail.length") else {
        panic!("expected a resolution error");
    };
    assert_eq!(error.index, 1);
    assert_eq!(error.segment, "tail");
    assert!(error.type_path.ends_with("Dog"));

    let before = kennel.dog.clone();
    let result = accessor.set_value(&mut kennel, "dog.tail", 1_u32);
    assert!(matches!(result, Err(AccessError::Resolution(_))));
    assert_eq!(kennel.dog, before);

    // Mutable walks report the value's type, not the reference's.
    let Err(AccessError::Resolution(error)) =
        accessor.set_value(&mut kennel, "guest.tail.length", 1_u32)
    else {
        panic!("expected a resolution error");
    };
    assert_eq!(error.index, 1);
    assert!(error.type_path.ends_with("Animal"));
}

#[test]
fn unregistered_values_have_no_members() {
    let registry = TypeRegistry::new();
    let accessor = PathAccessor::new(&registry);

    let dog = rex();

    let result = accessor.get(&dog, "age");
    assert!(matches!(result, Err(AccessError::Resolution(ref e)) if e.index == 0));
}

#[test]
fn set_of_get_leaves_graph_unchanged() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut kennel = kennel();
    let before = kennel.dog.clone();

    for path in ["dog.age", "dog.name"] {
        let value = accessor.get(&kennel, path).unwrap();
        let copy: Box<dyn Reflect> = if let Some(age) = value.downcast_ref::<u32>() {
            Box::new(*age)
        } else {
            Box::new(value.downcast_ref::<String>().unwrap().clone())
        };
        accessor.set(&mut kennel, path, copy).unwrap();
    }

    assert_eq!(kennel.dog, before);
}

#[test]
fn no_coercion_on_write() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut kennel = kennel();

    let Err(AccessError::TypeMismatch(error)) = accessor.set_value(&mut kennel, "dog.age", 4_u64)
    else {
        panic!("expected a type mismatch");
    };
    assert_eq!(error.member, "age");
    assert_eq!(kennel.dog.age, 3);
}

#[test]
fn read_only_members() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut kennel = kennel();

    let result = accessor.set_value(&mut kennel, "Label", String::from("Max"));
    let Err(AccessError::ReadOnly(error)) = result else {
        panic!("expected a read-only error");
    };
    assert_eq!((error.index, error.member), (0, "Label"));

    // No mutable projection through `Inner`.
    let result = accessor.set_value(&mut kennel, "Inner.age", 9_u32);
    assert!(matches!(result, Err(AccessError::ReadOnly(ref e)) if e.member == "Inner"));
    assert_eq!(kennel.dog.age, 3);

    // Reading through it is fine.
    assert_eq!(accessor.get_as::<u32>(&kennel, "Inner.age").unwrap(), &3);
}

#[test]
fn member_resolution_without_reading() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let kennel = kennel();

    let member = accessor.member(&kennel, "dog.name").unwrap();
    assert_eq!(member.declaring_type().type_ident(), "Animal");
    assert_eq!(member.depth(), 1);
    assert!(member.is_writable());

    assert!(accessor.member(&kennel, "guest").unwrap().is_dynamic());
}

#[test]
fn malformed_paths() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let kennel = kennel();

    assert_eq!(accessor.get(&kennel, "").unwrap_err(), AccessError::Parse(ParseError::Empty));
    assert!(matches!(
        accessor.get(&kennel, "dog..age"),
        Err(AccessError::Parse(ParseError::EmptySegment { offset: 4, .. }))
    ));
}

#[test]
fn parsed_paths_are_reusable() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let path = MemberPath::parse_owned(&String::from("dog.age")).unwrap();

    let first = kennel();
    let mut second = kennel();
    second.dog.age = 8;

    let read = |kennel: &Kennel| *accessor.get_path(kennel, &path).unwrap().downcast_ref::<u32>().unwrap();
    assert_eq!((read(&first), read(&second)), (3, 8));
}

#[test]
fn typed_read_reports_the_actual_type() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);

    let dog = rex();

    let result = accessor.get_as::<i32>(&dog, "age");
    assert!(matches!(result, Err(AccessError::Downcast { provided: "u32", .. })));
}

#[test]
fn present_optional_is_walked_through() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut owner = owner(Some(rex()));

    assert_eq!(accessor.get_as::<String>(&owner, "pet.name").unwrap(), "Rex");
    assert_eq!(accessor.get_as::<String>(&owner, "spare.name").unwrap(), "Tom");

    accessor.set_value(&mut owner, "pet.age", 4_u32).unwrap();
    assert_eq!(owner.pet.as_ref().map(|dog| dog.age), Some(4));

    // The terminal member is the option itself.
    assert!(accessor.get_as::<Option<Dog>>(&owner, "pet").unwrap().is_some());
    assert!(accessor.member(&owner, "pet").unwrap().info().is_optional());
}

#[test]
fn empty_optional_fails_without_writing() {
    let registry = registry();
    let accessor = PathAccessor::new(&registry);
    let mut owner = owner(None);

    let Err(AccessError::EmptyValue(error)) = accessor.get(&owner, "pet.name") else {
        panic!("expected an empty value error");
    };
    assert_eq!((error.index, error.member), (0, "pet"));
    assert!(error.type_path.ends_with("Owner"));

    let result = accessor.set_value(&mut owner, "pet.age", 4_u32);
    assert!(matches!(result, Err(AccessError::EmptyValue(ref e)) if e.index == 0));
    assert!(owner.pet.is_none());

    assert!(matches!(
        accessor.member(&owner, "pet.age"),
        Err(AccessError::EmptyValue(_))
    ));

    // The option itself can still be replaced.
    accessor.set_value(&mut owner, "pet", Some(rex())).unwrap();
    assert_eq!(accessor.get_as::<u32>(&owner, "pet.age").unwrap(), &3);
}

use binder_reflect::Reflect;
use binder_reflect::catalog::{all_declared, all_members, all_members_with, all_methods};
use binder_reflect::derive::Reflect;
use binder_reflect::display::{enum_display_name, property_display_name, type_display_name_of};
use binder_reflect::info::{DisplayName, MemberKind, Typed};
use binder_reflect::registry::TypeRegistry;

struct Editable;

#[derive(Reflect, Default)]
#[reflect(display = "Creature")]
struct Animal {
    #[reflect(display = "Animal Name", @Editable)]
    name: String,
    legs: u8,
}

#[derive(Reflect, Default)]
#[reflect(default)]
#[reflect(method(call = Self::describe), method(name = "Rename", call_mut = Self::rename))]
struct Dog {
    #[reflect(base)]
    animal: Animal,
    // Shadows `Animal::legs`.
    #[reflect(display = "Paws")]
    legs: u32,
    #[reflect(skip)]
    cache: Vec<u8>,
}

impl Dog {
    fn describe(&self) -> String {
        format!("{} with {} paws", self.animal.name, self.legs)
    }

    fn rename(&mut self) -> bool {
        self.animal.name.push('!');
        true
    }
}

#[derive(Reflect)]
struct Pair(u8, #[reflect(display = "Second")] String);

#[derive(Reflect)]
struct Marker;

#[derive(Reflect)]
#[reflect(property(get = Self::radius, set = Self::set_radius, display = "Radius"))]
#[reflect(property(name = "Center", get = Self::center, get_mut = Self::center_mut))]
#[reflect(event(name = "Changed", handler = dyn Fn(f32)))]
#[reflect(nested(Marker))]
struct Circle {
    r: f32,
    origin: (f32, f32),
}

impl Circle {
    fn radius(&self) -> &f32 {
        &self.r
    }

    fn set_radius(&mut self, radius: f32) {
        self.r = radius.max(0.0);
    }

    fn center(&self) -> &(f32, f32) {
        &self.origin
    }

    fn center_mut(&mut self) -> &mut (f32, f32) {
        &mut self.origin
    }
}

#[derive(Reflect)]
#[reflect(display = "All These Governors")]
enum Title {
    #[reflect(display = "Like a Dragon")]
    Yakuza,
    Tetris(u8),
    Other { id: u32 },
}

#[derive(Reflect)]
struct Garage {
    #[reflect(typed)]
    dog: Dog,
    spare: Animal,
}

fn names(members: &[binder_reflect::catalog::Member<'_>]) -> Vec<&'static str> {
    members.iter().map(|member| member.name()).collect()
}

#[test]
fn named_fields_in_declaration_order() {
    let info = Animal::type_info();
    assert_eq!(info.type_ident(), "Animal");
    assert_eq!(names(&all_members(info)), ["name", "legs"]);
    assert!(info.base().is_none());
}

#[test]
fn base_field_is_a_link_not_a_member() {
    let info = Dog::type_info();
    assert!(info.field("animal").is_none());
    assert!(info.field("cache").is_none());
    assert_eq!(info.base().map(|base| base.info().type_ident()), Some("Animal"));
}

#[test]
fn derived_declaration_hides_base_slot() {
    let members = all_members(Dog::type_info());
    assert_eq!(names(&members), ["legs", "name"]);

    assert_eq!(members[0].depth(), 0);
    assert!(members[0].ty().is::<u32>());
    assert_eq!(members[1].depth(), 1);
    assert_eq!(members[1].declaring_type().type_ident(), "Animal");
}

#[test]
fn members_read_through_the_base() {
    let dog = Dog {
        animal: Animal { name: "Rex".into(), legs: 4 },
        legs: 4,
        cache: Vec::new(),
    };
    let members = all_members(Dog::type_info());
    let name = members[1].read(&dog).unwrap();
    assert_eq!(name.downcast_ref::<String>().unwrap(), "Rex");
}

#[test]
fn attribute_filter() {
    let members = all_members_with::<Editable>(Dog::type_info());
    assert_eq!(names(&members), ["name"]);
}

#[test]
fn methods_and_constructors() {
    let info = Dog::type_info();
    assert_eq!(names(&all_methods(info)), ["describe", "Rename"]);

    let mut dog = Dog {
        animal: Animal { name: "Rex".into(), legs: 4 },
        legs: 4,
        cache: Vec::new(),
    };
    let methods = all_methods(info);
    let text = methods[0].invoke(&mut dog).unwrap();
    assert_eq!(*(*text).downcast_ref::<String>().unwrap(), "Rex with 4 paws");

    methods[1].invoke(&mut dog).unwrap();
    assert_eq!(dog.animal.name, "Rex!");

    let constructor = info.member(MemberKind::Constructor, "default").unwrap();
    let built = constructor.as_constructor().unwrap().construct();
    assert!((*built).is::<Dog>());
}

#[test]
fn tuple_fields_are_named_by_position() {
    let info = Pair::type_info();
    assert_eq!(names(&all_members(info)), ["0", "1"]);
    assert_eq!(property_display_name(info, "1"), "Second");

    let pair = Pair(7, "b".into());
    let first = info.field("0").unwrap().get(&pair).unwrap();
    assert_eq!(first.downcast_ref::<u8>(), Some(&7));
}

#[test]
fn unit_struct_has_no_members() {
    assert!(Marker::type_info().members().is_empty());
}

#[test]
fn properties() {
    let info = Circle::type_info();
    assert_eq!(names(&all_members(info)), ["r", "origin", "radius", "Center"]);

    let radius = info.property("radius").unwrap();
    assert!(radius.is_writable());
    assert!(!radius.has_getter_mut());

    let center = info.property("Center").unwrap();
    assert!(!center.is_writable());
    assert!(center.has_getter_mut());

    let mut circle = Circle { r: 1.0, origin: (0.0, 0.0) };
    radius.set(&mut circle, Box::new(-3.0_f32)).unwrap();
    assert_eq!(circle.r, 0.0);
}

#[test]
fn all_declared_covers_every_kind() {
    let declared = all_declared(Circle::type_info());
    let kinds: Vec<_> = declared.iter().map(|member| member.kind()).collect();
    assert!(kinds.contains(&MemberKind::Event));
    assert!(kinds.contains(&MemberKind::NestedType));

    let event = declared.iter().find(|member| member.name() == "Changed").unwrap();
    assert!(event.ty().is::<dyn Fn(f32)>());

    let nested = declared.iter().find(|member| member.kind() == MemberKind::NestedType).unwrap();
    assert_eq!(nested.name(), "Marker");
}

#[test]
fn display_names() {
    assert_eq!(type_display_name_of::<Animal>(), "Creature");
    assert_eq!(type_display_name_of::<Dog>(), "Dog");
    assert_eq!(type_display_name_of::<Title>(), "All These Governors");

    assert_eq!(property_display_name(Dog::type_info(), "name"), "Animal Name");
    assert_eq!(property_display_name(Dog::type_info(), "legs"), "Paws");
    assert_eq!(property_display_name(Circle::type_info(), "radius"), "Radius");

    assert_eq!(enum_display_name(&Title::Yakuza), "Like a Dragon");
    assert_eq!(enum_display_name(&Title::Tetris(1)), "Tetris");
    assert_eq!(enum_display_name(&Title::Other { id: 3 }), "Other");
}

#[test]
fn enum_table() {
    let info = Title::type_info();
    let variants = info.as_enum().unwrap();
    assert_eq!(variants.variants().len(), 3);
    assert_eq!(
        variants.variant("Yakuza").and_then(|v| v.get_attribute::<DisplayName>()).map(DisplayName::name),
        Some("Like a Dragon"),
    );
    assert!(info.members().is_empty());
}

#[test]
fn typed_fields_are_registered_with_owner() {
    let mut registry = TypeRegistry::new();
    assert!(registry.register::<Garage>());

    assert!(registry.get_of::<Dog>().is_some());
    // Through `Dog`'s base link.
    assert!(registry.get_of::<Animal>().is_some());
    assert_eq!(registry.len(), 3);

    assert!(!registry.register::<Dog>());
}

#[test]
fn dynamic_display_name() {
    let mut registry = TypeRegistry::new();
    registry.register::<Title>();

    let value: Box<dyn Reflect> = Box::new(Title::Yakuza);
    assert_eq!(registry.enum_display_name_dyn(&*value), "Like a Dragon");
    assert_eq!(registry.display_name_of(&*value), "All These Governors");
}

#[cfg(feature = "auto_register")]
mod auto_register {
    use binder_reflect::derive::Reflect;
    use binder_reflect::registry::TypeRegistry;

    #[derive(Reflect)]
    #[reflect(auto_register)]
    struct Submitted {
        value: i64,
    }

    #[test]
    fn annotated_types_are_collected() {
        let mut registry = TypeRegistry::new();
        assert!(registry.auto_register() >= 1);
        assert!(registry.get_of::<Submitted>().is_some());
        assert_eq!(registry.auto_register(), 0);
    }
}

use std::fmt;

/// Kind of a reflection, using TypeDoc's numeric values.
///
/// Unknown numbers are kept as `Other` so a model produced by a newer
/// generator still loads; the overlay simply ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionKind {
    Project,
    ExternalModule,
    Module,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    ObjectLiteral,
    TypeAlias,
    Event,
    Reference,
    Other(u32),
}

/// Key under which a kind's entries are grouped in a store document.
///
/// `Accessor` shares the `property` group: a get/set pair is localized as a
/// property whose entry is further split by direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Member(&'static str),
    AccessorDirection(&'static str),
    Unsupported,
}

impl ReflectionKind {
    pub fn from_number(value: u32) -> Self {
        match value {
            0 => ReflectionKind::Project,
            1 => ReflectionKind::ExternalModule,
            2 => ReflectionKind::Module,
            4 => ReflectionKind::Enum,
            16 => ReflectionKind::EnumMember,
            32 => ReflectionKind::Variable,
            64 => ReflectionKind::Function,
            128 => ReflectionKind::Class,
            256 => ReflectionKind::Interface,
            512 => ReflectionKind::Constructor,
            1024 => ReflectionKind::Property,
            2048 => ReflectionKind::Method,
            4096 => ReflectionKind::CallSignature,
            8192 => ReflectionKind::IndexSignature,
            16384 => ReflectionKind::ConstructorSignature,
            32768 => ReflectionKind::Parameter,
            65536 => ReflectionKind::TypeLiteral,
            131072 => ReflectionKind::TypeParameter,
            262144 => ReflectionKind::Accessor,
            524288 => ReflectionKind::GetSignature,
            1048576 => ReflectionKind::SetSignature,
            2097152 => ReflectionKind::ObjectLiteral,
            4194304 => ReflectionKind::TypeAlias,
            8388608 => ReflectionKind::Event,
            16777216 => ReflectionKind::Reference,
            other => ReflectionKind::Other(other),
        }
    }

    /// Class, Interface and Enum: the kinds that own a store document.
    pub fn is_top_level(self) -> bool {
        matches!(
            self,
            ReflectionKind::Class | ReflectionKind::Interface | ReflectionKind::Enum
        )
    }

    /// Signature kinds sit one extra level below their enclosing type.
    pub fn is_signature(self) -> bool {
        matches!(
            self,
            ReflectionKind::CallSignature
                | ReflectionKind::GetSignature
                | ReflectionKind::SetSignature
        )
    }

    pub fn store_key(self) -> StoreKey {
        match self {
            ReflectionKind::Property | ReflectionKind::Accessor => StoreKey::Member("property"),
            ReflectionKind::EnumMember => StoreKey::Member("enumMember"),
            ReflectionKind::CallSignature => StoreKey::Member("callSignature"),
            ReflectionKind::GetSignature => StoreKey::AccessorDirection("get"),
            ReflectionKind::SetSignature => StoreKey::AccessorDirection("set"),
            _ => StoreKey::Unsupported,
        }
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionKind::Other(value) => write!(f, "kind({})", value),
            kind => write!(f, "{:?}", kind),
        }
    }
}

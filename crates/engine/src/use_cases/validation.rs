//! Common input conversion for use cases.
//!
//! Use cases accept either value objects or raw primitives. Primitives are
//! wrapped through the value-object constructors here, so validation happens
//! once at the boundary.

use roster_domain::{
    CharacterClass, CharacterLevel, CharacterName, DomainError, ValidationKind,
};

/// Anything that can become a `CharacterName`.
pub trait NameInput {
    fn into_name(self) -> Result<CharacterName, DomainError>;
}

impl NameInput for CharacterName {
    fn into_name(self) -> Result<CharacterName, DomainError> {
        Ok(self)
    }
}

impl NameInput for &CharacterName {
    fn into_name(self) -> Result<CharacterName, DomainError> {
        Ok(self.clone())
    }
}

impl NameInput for &str {
    fn into_name(self) -> Result<CharacterName, DomainError> {
        CharacterName::new(self)
    }
}

impl NameInput for String {
    fn into_name(self) -> Result<CharacterName, DomainError> {
        CharacterName::new(self)
    }
}

impl NameInput for &String {
    fn into_name(self) -> Result<CharacterName, DomainError> {
        CharacterName::new(self.as_str())
    }
}

/// Anything that can become a `CharacterClass`.
pub trait ClassInput {
    fn into_class(self) -> Result<CharacterClass, DomainError>;
}

impl ClassInput for CharacterClass {
    fn into_class(self) -> Result<CharacterClass, DomainError> {
        Ok(self)
    }
}

impl ClassInput for &str {
    fn into_class(self) -> Result<CharacterClass, DomainError> {
        CharacterClass::parse(self)
    }
}

impl ClassInput for String {
    fn into_class(self) -> Result<CharacterClass, DomainError> {
        CharacterClass::parse(&self)
    }
}

impl ClassInput for &String {
    fn into_class(self) -> Result<CharacterClass, DomainError> {
        CharacterClass::parse(self)
    }
}

/// Anything that can become a `CharacterLevel`.
pub trait LevelInput {
    fn into_level(self) -> Result<CharacterLevel, DomainError>;
}

impl LevelInput for CharacterLevel {
    fn into_level(self) -> Result<CharacterLevel, DomainError> {
        Ok(self)
    }
}

macro_rules! level_input_via_i64 {
    ($($ty:ty),*) => {
        $(
            impl LevelInput for $ty {
                fn into_level(self) -> Result<CharacterLevel, DomainError> {
                    CharacterLevel::new(self)
                }
            }
        )*
    };
}

level_input_via_i64!(u8, u16, u32, i8, i16, i32, i64);

impl LevelInput for u64 {
    fn into_level(self) -> Result<CharacterLevel, DomainError> {
        let value = i64::try_from(self).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidLevel,
                format!("Level {} is out of range", self),
            )
        })?;
        CharacterLevel::new(value)
    }
}

impl LevelInput for usize {
    fn into_level(self) -> Result<CharacterLevel, DomainError> {
        let value = u64::try_from(self).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidLevel,
                format!("Level {} is out of range", self),
            )
        })?;
        value.into_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_from_primitives_and_value_objects_agree() {
        let typed = CharacterName::new("Rex").unwrap();
        assert_eq!("rex".into_name().unwrap(), typed);
        assert_eq!(String::from("REX").into_name().unwrap(), typed);
        assert_eq!((&typed).into_name().unwrap(), typed);
        assert!("R".into_name().is_err());
    }

    #[test]
    fn classes_from_primitives() {
        assert_eq!("guerreiro".into_class().unwrap(), CharacterClass::Guerreiro);
        assert_eq!(CharacterClass::Mago.into_class().unwrap(), CharacterClass::Mago);
        let err = String::from("bardo").into_class().unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidClass));
    }

    #[test]
    fn levels_from_any_integer() {
        assert_eq!(10u8.into_level().unwrap().value(), 10);
        assert_eq!(10i32.into_level().unwrap().value(), 10);
        assert_eq!(10usize.into_level().unwrap().value(), 10);
        assert!((-1i32).into_level().is_err());
        let err = u64::MAX.into_level().unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidLevel));
        let err = usize::MAX.into_level().unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidLevel));
    }
}

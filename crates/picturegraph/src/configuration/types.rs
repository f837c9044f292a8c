use std::fmt;

use super::construction::Construction;

/// Stable handle of a configuration object (its position in the configuration).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    Point,
    Line,
    Circle,
}

/// Symbolic node: a free parameter or a construction applied to earlier objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigurationObject {
    Loose(ObjectKind),
    Constructed {
        construction: Construction,
        arguments: Vec<ObjectId>,
    },
}

impl ConfigurationObject {
    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            ConfigurationObject::Loose(kind) => *kind,
            ConfigurationObject::Constructed { construction, .. } => construction.output_kind(),
        }
    }
    #[inline]
    pub fn is_loose(&self) -> bool {
        matches!(self, ConfigurationObject::Loose(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("argument {argument} does not refer to an earlier object")]
    UnknownArgument { argument: ObjectId },
    #[error("{construction:?} takes {expected} arguments, got {actual}")]
    ArgumentCount {
        construction: Construction,
        expected: usize,
        actual: usize,
    },
    #[error("{construction:?} expects a {expected:?} at position {position}, got a {actual:?}")]
    ArgumentKind {
        construction: Construction,
        position: usize,
        expected: ObjectKind,
        actual: ObjectKind,
    },
    #[error("{construction:?} received the same argument {argument} twice")]
    RepeatedArgument {
        construction: Construction,
        argument: ObjectId,
    },
}

/// Append-only list of objects in dependency order.
///
/// Invariants:
/// - every argument of a constructed object refers to an earlier position;
/// - argument kinds match the construction's signature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    objects: Vec<ConfigurationObject>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loose object.
    pub fn add_loose(&mut self, kind: ObjectKind) -> ObjectId {
        self.objects.push(ConfigurationObject::Loose(kind));
        ObjectId(self.objects.len() - 1)
    }

    /// Append a constructed object after validating its arguments.
    pub fn add_constructed(
        &mut self,
        construction: Construction,
        arguments: &[ObjectId],
    ) -> Result<ObjectId, ConfigurationError> {
        let signature = construction.signature();
        if signature.len() != arguments.len() {
            return Err(ConfigurationError::ArgumentCount {
                construction,
                expected: signature.len(),
                actual: arguments.len(),
            });
        }
        for (position, (&argument, &expected)) in arguments.iter().zip(signature).enumerate() {
            let object = self
                .objects
                .get(argument.0)
                .ok_or(ConfigurationError::UnknownArgument { argument })?;
            if object.kind() != expected {
                return Err(ConfigurationError::ArgumentKind {
                    construction,
                    position,
                    expected,
                    actual: object.kind(),
                });
            }
            if arguments[..position].contains(&argument) {
                return Err(ConfigurationError::RepeatedArgument {
                    construction,
                    argument,
                });
            }
        }
        self.objects.push(ConfigurationObject::Constructed {
            construction,
            arguments: arguments.to_vec(),
        });
        Ok(ObjectId(self.objects.len() - 1))
    }

    /// A copy of `self` extended by one constructed object.
    pub fn extended(
        &self,
        construction: Construction,
        arguments: &[ObjectId],
    ) -> Result<(Configuration, ObjectId), ConfigurationError> {
        let mut next = self.clone();
        let id = next.add_constructed(construction, arguments)?;
        Ok((next, id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object behind `id`. Panics on a foreign id.
    #[inline]
    pub fn get(&self, id: ObjectId) -> &ConfigurationObject {
        &self.objects[id.0]
    }

    #[inline]
    pub fn last_object(&self) -> Option<ObjectId> {
        self.objects.len().checked_sub(1).map(ObjectId)
    }

    /// All objects with their ids, in dependency order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ConfigurationObject)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (ObjectId(i), object))
    }

    /// True if `self` is `prefix` plus exactly one object.
    pub fn extends_by_one(&self, prefix: &Configuration) -> bool {
        self.objects.len() == prefix.objects.len() + 1
            && self.objects[..prefix.objects.len()] == prefix.objects[..]
    }
}

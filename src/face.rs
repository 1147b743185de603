//! Face label module.
//!
//! Provides the `Face` type, the label shown on one side of a die.
//! Labels are either integers or text.

use crate::error::DiceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A face label: numeric or textual.
///
/// Faces are totally ordered so rolls can be sorted into combinations:
/// integers compare numerically, text compares lexicographically, and
/// every integer sorts before every text label.
///
/// # Examples
///
/// ```rust
/// use montecarlo::Face;
///
/// let six: Face = 6i64.into();
/// let heads: Face = "H".into();
///
/// assert_eq!(six, Face::Int(6));
/// assert_eq!(heads.as_text(), Some("H"));
/// assert!(six < heads);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    Int(i64),
    Text(String),
}

impl Face {
    /// The integer value, if this is a numeric face.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Face::Int(n) => Some(*n),
            Face::Text(_) => None,
        }
    }

    /// The text value, if this is a text face.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Face::Int(_) => None,
            Face::Text(s) => Some(s),
        }
    }
}

macro_rules! face_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Face {
                fn from(n: $t) -> Self {
                    Face::Int(n as i64)
                }
            }
        )*
    };
}

face_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

// `u64` and `usize` can exceed `i64`, so they convert fallibly and do not
// satisfy the `Into<Face>` bounds taken by `Die::new`.
macro_rules! face_try_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Face {
                type Error = DiceError;

                fn try_from(n: $t) -> Result<Self, Self::Error> {
                    i64::try_from(n).map(Face::Int).map_err(|_| {
                        DiceError::invalid_argument(format!("face {} is out of range", n))
                    })
                }
            }
        )*
    };
}

face_try_from_unsigned!(u64, usize);

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Face::Text(s.to_owned())
    }
}

impl From<String> for Face {
    fn from(s: String) -> Self {
        Face::Text(s)
    }
}

impl From<char> for Face {
    fn from(c: char) -> Self {
        Face::Text(c.to_string())
    }
}

impl From<&Face> for Face {
    fn from(face: &Face) -> Self {
        face.clone()
    }
}

/// Fail with `InvalidArgument` if any face appears more than once.
pub(crate) fn check_distinct(faces: &[Face]) -> Result<(), DiceError> {
    let mut seen = HashSet::with_capacity(faces.len());
    for face in faces {
        if !seen.insert(face) {
            return Err(DiceError::invalid_argument(format!(
                "faces must be distinct, {} appears more than once",
                face
            )));
        }
    }
    Ok(())
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(n) => write!(f, "{}", n),
            Face::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_conversions() {
        assert_eq!(Face::from(3u8), Face::Int(3));
        assert_eq!(Face::from(-2), Face::Int(-2));
        assert_eq!(Face::from('x'), Face::Text("x".to_string()));
        assert_eq!(Face::from(String::from("ace")).as_text(), Some("ace"));
        assert_eq!(Face::from(4).as_int(), Some(4));
        assert_eq!(Face::from("4").as_int(), None);
    }

    #[test]
    fn test_wide_integer_conversions() {
        assert_eq!(Face::from(-7isize), Face::Int(-7));
        assert_eq!(Face::try_from(5usize), Ok(Face::Int(5)));
        assert_eq!(Face::try_from(9u64), Ok(Face::Int(9)));
        assert!(matches!(
            Face::try_from(u64::MAX),
            Err(DiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_distinct() {
        assert!(check_distinct(&[Face::Int(1), Face::from("1")]).is_ok());
        assert!(check_distinct(&[Face::Int(1), Face::Int(2), Face::Int(1)]).is_err());
    }

    #[test]
    fn test_face_ordering() {
        let mut faces: Vec<Face> = vec!["b".into(), 10i64.into(), "a".into(), 2i64.into()];
        faces.sort();
        assert_eq!(
            faces,
            vec![Face::Int(2), Face::Int(10), Face::from("a"), Face::from("b")]
        );
    }

    #[test]
    fn test_face_serde_untagged() {
        let faces: Vec<Face> = serde_json::from_str(r#"[1, "T", 3]"#).unwrap();
        assert_eq!(faces, vec![Face::Int(1), Face::from("T"), Face::Int(3)]);
        assert_eq!(serde_json::to_string(&faces).unwrap(), r#"[1,"T",3]"#);
    }
}

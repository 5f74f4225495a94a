//! Implements the mapping from the attributes of a relation to the columns of a chase table.
use super::Error;
use itertools::Itertools;
use std::collections::HashMap;
use tableau_deps::syntax::Attr;

/// Assigns a stable column position to every attribute of a relation. Positions follow the
/// lexicographic order of attribute names, so the same attributes always produce the same
/// column order.
#[derive(Clone, PartialEq, Debug)]
pub struct Schema {
    /// Is the list of attributes in column order.
    attributes: Vec<Attr>,

    /// Maps every attribute to its column.
    positions: HashMap<Attr, usize>,
}

impl Schema {
    /// Builds a schema over `attributes`. Duplicate attributes are ignored.
    pub fn build<'a, I: IntoIterator<Item = &'a Attr>>(attributes: I) -> Self {
        let attributes = attributes
            .into_iter()
            .cloned()
            .sorted()
            .dedup()
            .collect_vec();
        let positions = attributes
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, attr)| (attr, i))
            .collect();
        Self {
            attributes,
            positions,
        }
    }

    /// Returns the attributes of the schema in column order.
    #[inline(always)]
    pub fn attributes(&self) -> &[Attr] {
        &self.attributes
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns true if `attr` is an attribute of the schema.
    pub fn contains(&self, attr: &Attr) -> bool {
        self.positions.contains_key(attr)
    }

    /// Returns the column of `attr` or fails with [`Error::SchemaMismatch`] if `attr` is not
    /// in the schema.
    pub fn position(&self, attr: &Attr) -> Result<usize, Error> {
        self.positions
            .get(attr)
            .copied()
            .ok_or_else(|| Error::SchemaMismatch {
                attribute: attr.clone(),
            })
    }

    /// Returns the columns of `attrs`, preserving their order. It fails on the first attribute
    /// that is not in the schema.
    pub fn positions<'a, I: IntoIterator<Item = &'a Attr>>(
        &self,
        attrs: I,
    ) -> Result<Vec<usize>, Error> {
        attrs.into_iter().map(|attr| self.position(attr)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableau_deps::attrs;

    #[test]
    fn test_build() {
        let schema = Schema::build(&attrs![D, B, A, C, B]);
        assert_eq!(attrs![A, B, C, D], schema.attributes().to_vec());
        assert_eq!(4, schema.len());
        assert!(!schema.is_empty());
        assert!(Schema::build(&attrs![]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let first = Schema::build(&attrs![Name, Age, City]);
        let second = Schema::build(&attrs![City, Name, Age]);
        assert_eq!(first, second);
        assert_eq!(attrs![Age, City, Name], first.attributes().to_vec());
    }

    #[test]
    fn test_positions() {
        let schema = Schema::build(&attrs![C, A, B]);
        assert_eq!(Ok(0), schema.position(&"A".into()));
        assert_eq!(Ok(2), schema.position(&"C".into()));
        assert_eq!(Ok(vec![2, 0]), schema.positions(&attrs![C, A]));
        assert!(schema.contains(&"B".into()));
        assert!(!schema.contains(&"E".into()));
        assert_eq!(
            Err(Error::SchemaMismatch {
                attribute: "E".into()
            }),
            schema.positions(&attrs![A, E, F])
        );
    }
}

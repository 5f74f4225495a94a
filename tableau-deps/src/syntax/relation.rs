/*! Defines relational schemas together with the dependencies that hold on them. */
use super::{attribute::normalize, Attr, FD, MVD};
use itertools::Itertools;
use std::fmt;

/// Represents a relational schema: a named set of attributes, an ordered list of functional
/// dependencies and an ordered list of multivalued dependencies that hold on the schema.
#[derive(Clone, PartialEq, Debug)]
pub struct Relation {
    name: String,
    attributes: Vec<Attr>,
    fds: Vec<FD>,
    mvds: Vec<MVD>,
}

impl Relation {
    /// Creates a new relation with no dependencies.
    pub fn new<S, I>(name: S, attributes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Attr>,
    {
        Self {
            name: name.into(),
            attributes: normalize(attributes),
            fds: Vec::new(),
            mvds: Vec::new(),
        }
    }

    /// Returns the name of the relation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes of the relation, sorted by name.
    pub fn attributes(&self) -> &[Attr] {
        &self.attributes
    }

    /// Returns the functional dependencies of the relation in the order they were added.
    pub fn fds(&self) -> &[FD] {
        &self.fds
    }

    /// Returns the multivalued dependencies of the relation in the order they were added.
    pub fn mvds(&self) -> &[MVD] {
        &self.mvds
    }

    /// Adds `fd` to the functional dependencies of the relation unless it already exists.
    pub fn add_fd(&mut self, fd: FD) {
        if !self.fds.contains(&fd) {
            self.fds.push(fd);
        }
    }

    /// Adds `mvd` to the multivalued dependencies of the relation unless it already exists.
    pub fn add_mvd(&mut self, mvd: MVD) {
        if !self.mvds.contains(&mvd) {
            self.mvds.push(mvd);
        }
    }

    /// Consumes the relation and returns it with `fds` added.
    pub fn with_fds<I: IntoIterator<Item = FD>>(mut self, fds: I) -> Self {
        fds.into_iter().for_each(|fd| self.add_fd(fd));
        self
    }

    /// Consumes the relation and returns it with `mvds` added.
    pub fn with_mvds<I: IntoIterator<Item = MVD>>(mut self, mvds: I) -> Self {
        mvds.into_iter().for_each(|mvd| self.add_mvd(mvd));
        self
    }

    /// Returns a copy of the relation without the functional dependency at `index`.
    pub fn without_fd(&self, index: usize) -> Self {
        let fds = self
            .fds
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, fd)| fd.clone())
            .collect();
        Self {
            fds,
            ..self.clone()
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "{}({})", self.name, self.attributes.iter().join(", "))?;
        for fd in &self.fds {
            writeln!(f, "  {}", fd)?;
        }
        for mvd in &self.mvds {
            writeln!(f, "  {}", mvd)?;
        }
        Ok(())
    }
}

/// Is a named subset of the attributes of a relation, used to describe a decomposition.
#[derive(Clone, PartialEq, Debug)]
pub struct Fragment {
    name: String,
    attributes: Vec<Attr>,
}

impl Fragment {
    /// Creates a new fragment.
    pub fn new<S, I>(name: S, attributes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Attr>,
    {
        Self {
            name: name.into(),
            attributes: normalize(attributes),
        }
    }

    /// Returns the name of the fragment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes of the fragment, sorted by name.
    pub fn attributes(&self) -> &[Attr] {
        &self.attributes
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}({})", self.name, self.attributes.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, fd, mvd};

    #[test]
    fn test_relation() {
        let relation = Relation::new("R", attrs![C, A, B, A]);
        assert_eq!("R", relation.name());
        assert_eq!(attrs![A, B, C], relation.attributes().to_vec());
        assert!(relation.fds().is_empty());
        assert!(relation.mvds().is_empty());
    }

    #[test]
    fn test_add_dependencies() {
        let mut relation = Relation::new("R", attrs![A, B, C]);
        relation.add_fd(fd!(A -> B));
        relation.add_fd(fd!(B -> C));
        relation.add_fd(fd!(A -> B));
        relation.add_mvd(mvd!(A ->> C));
        relation.add_mvd(mvd!(A ->> C));
        assert_eq!(vec![fd!(A -> B), fd!(B -> C)], relation.fds().to_vec());
        assert_eq!(vec![mvd!(A ->> C)], relation.mvds().to_vec());
    }

    #[test]
    fn test_without_fd() {
        let relation = Relation::new("R", attrs![A, B, C])
            .with_fds(vec![fd!(A -> B), fd!(B -> C), fd!(A -> C)])
            .with_mvds(vec![mvd!(A ->> B)]);
        let smaller = relation.without_fd(1);
        assert_eq!(vec![fd!(A -> B), fd!(A -> C)], smaller.fds().to_vec());
        assert_eq!(relation.mvds(), smaller.mvds());
        assert_eq!(relation.attributes(), smaller.attributes());
        assert_eq!(3, relation.fds().len());
        assert_eq!(relation.fds(), relation.without_fd(3).fds());
    }

    #[test]
    fn test_display() {
        let relation = Relation::new("R", attrs![A, B, C])
            .with_fds(vec![fd!(A -> B)])
            .with_mvds(vec![mvd!(A ->> C)]);
        assert_eq!("R(A, B, C)\n  A -> B\n  A ->> C\n", relation.to_string());
        assert_eq!("R1(A, B)", Fragment::new("R1", attrs![B, A]).to_string());
    }
}

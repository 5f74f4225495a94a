/*! Defines macros for building attributes and dependencies concisely. */

/// Creates a vector of [`Attr`](crate::syntax::Attr) from a list of identifiers.
///
/// **Example**:
/// ```rust
/// # use tableau_deps::attrs;
/// let attrs = attrs![A, B, C];
/// assert_eq!("[A, B, C]", format!("{:?}", attrs));
/// ```
#[macro_export]
macro_rules! attrs {
    ($($a:ident),* $(,)?) => {{
        let attrs: ::std::vec::Vec<$crate::syntax::Attr> =
            vec![$($crate::syntax::Attr::from(stringify!($a))),*];
        attrs
    }};
}

/// Creates a functional dependency ([`FD`](crate::syntax::FD)).
///
/// **Example**:
/// ```rust
/// # use tableau_deps::fd;
/// let fd = fd!(B, A -> C);
/// assert_eq!("A, B -> C", fd.to_string());
/// ```
#[macro_export]
macro_rules! fd {
    ($($l:ident),* -> $($r:ident),*) => {
        $crate::syntax::FD::new($crate::attrs![$($l),*], $crate::attrs![$($r),*])
    };
}

/// Creates a multivalued dependency ([`MVD`](crate::syntax::MVD)).
///
/// **Example**:
/// ```rust
/// # use tableau_deps::mvd;
/// let mvd = mvd!(A ->> C, B);
/// assert_eq!("A ->> B, C", mvd.to_string());
/// ```
#[macro_export]
macro_rules! mvd {
    ($($l:ident),* ->> $($r:ident),*) => {
        $crate::syntax::MVD::new($crate::attrs![$($l),*], $crate::attrs![$($r),*])
    };
}

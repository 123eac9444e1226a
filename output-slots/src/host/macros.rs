//! Declaration macro for host types.

/// Declares the outputs of a host type.
///
/// Generates a [`DeclaresOutputs`](crate::DeclaresOutputs) impl whose
/// registry is built once on first use, and one inherent reader method per
/// declared name. Each `;`-terminated group is one `declare_outputs` call:
/// its names share the JSON options object after `=>`, and later groups
/// replace earlier declarations of the same name. A name repeated across
/// groups still gets a single reader.
///
/// A parent type after `:` seeds the registry with a copy of the parent's
/// declarations. The parent's own registry is not modified. Readers for
/// inherited names are generated for the names listed in brackets after the
/// parent; a listed name the parent never declared reads as
/// [`UnknownOutputError`](crate::UnknownOutputError).
///
/// The generated readers call [`HasOutputs::get_output`](crate::HasOutputs::get_output),
/// so the host must also implement [`HasOutputs`](crate::HasOutputs).
///
/// ```rust,ignore
/// declare_outputs! {
///     CreateUser {
///         user, token => { "required": true };
///         notice;
///     }
/// }
///
/// declare_outputs! {
///     CreateAdmin: CreateUser [user, token] {
///         notice => { "required": true };
///         permissions;
///     }
/// }
/// ```
#[macro_export]
macro_rules! declare_outputs {
    (
        $host:ident $(: $parent:ty $([$($inherited:ident),* $(,)?])?)? {
            $( $($name:ident),+ $(=> $options:tt)? );+ $(;)?
        }
    ) => {
        impl $crate::DeclaresOutputs for $host {
            fn output_registry() -> ::std::sync::Arc<$crate::OutputRegistry> {
                static REGISTRY: ::std::sync::LazyLock<::std::sync::Arc<$crate::OutputRegistry>> =
                    ::std::sync::LazyLock::new(|| {
                        let mut registry = $crate::__base_registry!($($parent)?)
                            .with_owner(::std::stringify!($host));
                        $(
                            registry.declare_outputs(
                                [$(::std::stringify!($name)),+],
                                $crate::__output_options!($($options)?),
                            );
                        )+
                        registry.into_shared()
                    });
                ::std::sync::Arc::clone(&REGISTRY)
            }
        }

        $crate::__output_readers!($host; $($($($inherited)*)?)? $($($name)+)+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __base_registry {
    () => {
        $crate::OutputRegistry::new()
    };
    ($parent:ty) => {
        $crate::OutputRegistry::inherit(&<$parent as $crate::DeclaresOutputs>::output_registry())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __output_options {
    () => {
        $crate::OutputOptions::new()
    };
    ($options:tt) => {
        $crate::OutputOptions::from($crate::__private::serde_json::json!($options))
    };
}

/// Emits one reader per distinct name, at the name's last occurrence.
///
/// Each step scopes a local macro whose literal arms are the names still to
/// come, followed by the current name. The current name only reaches its own
/// arm, and so emits the reader, when no later occurrence matches first.
#[doc(hidden)]
#[macro_export]
macro_rules! __output_readers {
    ($host:ident;) => {};
    ($host:ident; $name:ident $($later:ident)*) => {
        const _: () = {
            #[allow(unused_imports)]
            use $crate::HasOutputs as __HasOutputs;
            #[allow(unused_imports)]
            use $crate::__private::OutputRead as __OutputRead;

            macro_rules! __reader {
                $( ($later) => {}; )*
                ($name) => {
                    impl $host {
                        #[doc = ::std::concat!("Reads the `", ::std::stringify!($name), "` output.")]
                        #[allow(dead_code)]
                        pub fn $name(&self) -> __OutputRead<'_> {
                            __HasOutputs::get_output(self, ::std::stringify!($name))
                        }
                    }
                };
            }

            __reader!($name);
        };

        $crate::__output_readers!($host; $($later)*);
    };
}

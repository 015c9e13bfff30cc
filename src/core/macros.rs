//! Macros for ergonomic state enum definition.

/// Generate a state enum with its `State` trait implementation.
///
/// Covers the common case of a fieldless enum: emits the derives the
/// `State` trait requires, a `name()` that stringifies each variant, and
/// an `is_final()` driven by the optional `final:` list.
///
/// # Example
///
/// ```
/// use pivot::state_enum;
///
/// state_enum! {
///     pub enum GameState {
///         Playing,
///         Paused,
///         GameOver,
///     }
///     final: [GameOver]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Idle,
            Walking,
            GameOver,
        }
        final: [GameOver]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Idle;
        assert_eq!(state.name(), "Idle");
        assert!(!state.is_final());

        let over = TestState::GameOver;
        assert_eq!(over.name(), "GameOver");
        assert!(over.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        let _state = PublicState::A;
    }

    #[test]
    fn state_enum_works_without_final_list() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_final());
    }
}

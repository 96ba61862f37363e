//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Solver` impl from `PartSolver` impls
///
/// Reads the part count from the `#[advent_solver(parts = N)]` attribute and
/// emits a `Solver` implementation whose `solve_part` routes each part number
/// in `1..=N` to the corresponding `PartSolver<N>` impl. A missing
/// `PartSolver` impl for any routed part is a compile error, so the
/// advertised part count is always backed by code.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
/// use advent_solver_macros::AdventSolver;
///
/// #[derive(AdventSolver)]
/// #[advent_solver(parts = 2)]
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver { /* ... */ }
/// impl PartSolver<1> for Day1Solver { /* ... */ }
/// impl PartSolver<2> for Day1Solver { /* ... */ }
/// ```
#[proc_macro_derive(AdventSolver, attributes(advent_solver))]
pub fn derive_advent_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent_solver"))
        .expect("AdventSolver derive macro requires #[advent_solver(...)] attribute");

    let mut parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[advent_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(parts >= 1, "'parts' must be at least 1");

    let arms = (1..=parts).map(|n| {
        let lit = proc_macro2::Literal::u8_unsuffixed(n);
        quote! {
            #lit => <Self as ::advent_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> Result<String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::advent_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates the code to register a solver with the inventory system,
/// allowing it to be discovered and registered automatically.
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
///   |
///   | struct YourSolver;
///   |        ^^^^^^^^^^ unsatisfied trait bound
///   |
/// help: the trait `Solver` is not implemented for `YourSolver`
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver::Solver;
/// use advent_solver_macros::AutoRegisterSolver;
///
/// #[derive(AutoRegisterSolver)]
/// #[puzzle(day = 1, tags = ["dial"])]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let puzzle_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterSolver derive macro requires #[puzzle(...)] attribute");

    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    puzzle_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    // Skip comma if present
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[puzzle(...)] attribute");

    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    // Compile-time check that the type implements Solver, for a clearer
    // error message than the raw plugin expansion would give
    let expanded = quote! {
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}

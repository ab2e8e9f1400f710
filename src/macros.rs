//! Declaration-site macros
//!
//! `signature!` captures a declared parameter list the way a decorator would
//! read it from the source, `call_args!` captures one invocation's values,
//! and `identity!` resolves the callable's qualified name from the call
//! site's `module_path!()`. All three are thin sugar over the builder APIs;
//! variadic signatures use `Signature::builder()` directly.

/// Declare a parameter manifest: `signature![a, b, c = 1]`.
///
/// Defaults are captured once, at declaration time.
#[macro_export]
macro_rules! signature {
    (@param $builder:ident, $name:ident) => {
        $builder.param(stringify!($name))
    };
    (@param $builder:ident, $name:ident = $default:expr) => {
        $builder.param_with_default(stringify!($name), $crate::value::ArgValue::of($default))
    };
    ($($name:ident $(= $default:expr)?),* $(,)?) => {{
        let builder = $crate::signature::Signature::builder();
        $(let builder = $crate::signature!(@param builder, $name $(= $default)?);)*
        builder.build()
    }};
}

/// Capture one invocation's values: `call_args![2, 3]`,
/// `call_args![2, 3; c = 4]`, `call_args![; c = 4]`.
///
/// Values are captured by move into their `Debug` form; borrowed data is
/// cloned at the call site.
#[macro_export]
macro_rules! call_args {
    () => {
        $crate::signature::CallArgs::new()
    };
    ($($pos:expr),+ $(,)?) => {{
        let args = $crate::signature::CallArgs::new();
        $(let args = args.positional($crate::value::ArgValue::of($pos));)+
        args
    }};
    ($($pos:expr),* ; $($name:ident = $value:expr),* $(,)?) => {{
        let args = $crate::signature::CallArgs::new();
        $(let args = args.positional($crate::value::ArgValue::of($pos));)*
        $(let args = args.keyword(stringify!($name), $crate::value::ArgValue::of($value));)*
        args
    }};
}

/// Resolve a callable identity from the call site's module:
/// `identity!(fn multiply)`, `identity!(OrderBook::insert)`,
/// `identity!(closure)`.
#[macro_export]
macro_rules! identity {
    (fn $name:ident) => {
        $crate::identity::Identity::function(
            &$crate::identity::dotted_module_path(module_path!()),
            stringify!($name),
        )
    };
    ($type_name:ident :: $name:ident) => {
        $crate::identity::Identity::method(
            &$crate::identity::dotted_module_path(module_path!()),
            stringify!($type_name),
            stringify!($name),
        )
    };
    (closure) => {
        $crate::identity::Identity::closure(&$crate::identity::dotted_module_path(
            module_path!(),
        ))
    };
}

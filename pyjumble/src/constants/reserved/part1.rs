//! Control names and the global builtin function/type surface.

/// Names with special runtime meaning plus everything `dir(builtins)`
/// exposes as a callable or constant (CPython 3.12 snapshot).
pub(super) const NAMES: &[&str] = &[
    // Control names: renaming any of these corrupts dispatch or
    // construction semantics.
    "self",
    "cls",
    "__init__",
    "main",
    "super",
    // Builtin functions and types.
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "copyright",
    "credits",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "exit",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "license",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "quit",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "tuple",
    "type",
    "vars",
    "zip",
    // Builtin constants and module-level dunders.
    "True",
    "False",
    "None",
    "Ellipsis",
    "NotImplemented",
    "__debug__",
    "__doc__",
    "__import__",
    "__build_class__",
    "__loader__",
    "__name__",
    "__package__",
    "__spec__",
];

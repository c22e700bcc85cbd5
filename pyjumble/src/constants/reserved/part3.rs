//! Member surface of the numeric, text, sequence, mapping and set builtins.

/// `dir(int) | dir(float) | dir(str) | dir(list) | dir(dict) | dir(set) |
/// dir(tuple)` minus what part2 already carries (duplicates are harmless,
/// the aggregate is a set).
pub(super) const NAMES: &[&str] = &[
    // Numeric protocol.
    "__abs__",
    "__add__",
    "__and__",
    "__bool__",
    "__ceil__",
    "__divmod__",
    "__float__",
    "__floor__",
    "__floordiv__",
    "__index__",
    "__int__",
    "__invert__",
    "__lshift__",
    "__mod__",
    "__mul__",
    "__neg__",
    "__or__",
    "__pos__",
    "__pow__",
    "__radd__",
    "__rand__",
    "__rdivmod__",
    "__rfloordiv__",
    "__rlshift__",
    "__rmod__",
    "__rmul__",
    "__ror__",
    "__round__",
    "__rpow__",
    "__rrshift__",
    "__rshift__",
    "__rsub__",
    "__rtruediv__",
    "__rxor__",
    "__sub__",
    "__truediv__",
    "__trunc__",
    "__xor__",
    "as_integer_ratio",
    "bit_count",
    "bit_length",
    "conjugate",
    "denominator",
    "from_bytes",
    "fromhex",
    "imag",
    "is_integer",
    "numerator",
    "real",
    "to_bytes",
    // Text surface.
    "capitalize",
    "casefold",
    "center",
    "count",
    "encode",
    "endswith",
    "expandtabs",
    "find",
    "format_map",
    "index",
    "isalnum",
    "isalpha",
    "isascii",
    "isdecimal",
    "isdigit",
    "isidentifier",
    "islower",
    "isnumeric",
    "isprintable",
    "isspace",
    "istitle",
    "isupper",
    "join",
    "ljust",
    "lower",
    "lstrip",
    "maketrans",
    "partition",
    "removeprefix",
    "removesuffix",
    "rfind",
    "rindex",
    "rjust",
    "rpartition",
    "rsplit",
    "rstrip",
    "split",
    "splitlines",
    "startswith",
    "strip",
    "swapcase",
    "title",
    "translate",
    "upper",
    "zfill",
    // Sequence protocol.
    "__contains__",
    "__delitem__",
    "__getitem__",
    "__getnewargs__",
    "__iadd__",
    "__imul__",
    "__len__",
    "__length_hint__",
    "__reversed__",
    "__setitem__",
    // List surface.
    "append",
    "clear",
    "copy",
    "extend",
    "insert",
    "pop",
    "remove",
    "reverse",
    "sort",
    // Mapping surface.
    "__ior__",
    "fromkeys",
    "get",
    "items",
    "keys",
    "popitem",
    "setdefault",
    "update",
    "values",
    // Set surface.
    "__iand__",
    "__isub__",
    "__ixor__",
    "add",
    "difference",
    "difference_update",
    "discard",
    "intersection",
    "intersection_update",
    "isdisjoint",
    "issubset",
    "issuperset",
    "symmetric_difference",
    "symmetric_difference_update",
    "union",
];

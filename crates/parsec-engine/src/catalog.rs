//! Static catalog of the function library the engine exposes.
//!
//! Pure data, no logic: the engine owns the actual implementations,
//! this table only describes them for help screens and docs.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One category of supported functions/operators.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionGroup {
    pub name: &'static str,
    pub entries: &'static [&'static str],
}

static CATALOG: Lazy<Vec<FunctionGroup>> = Lazy::new(|| {
    vec![
        FunctionGroup {
            name: "arithmetic",
            entries: &[
                "+ (addition)",
                "- (subtraction)",
                "* (multiplication)",
                "/ (division)",
                "^ (power)",
                "+= -= *= /= (assignment operators)",
            ],
        },
        FunctionGroup {
            name: "trigonometric",
            entries: &[
                "sin(x) - sine function",
                "cos(x) - cosine function",
                "tan(x) - tangent function",
                "asin(x) - arc sine",
                "acos(x) - arc cosine",
                "atan(x) - arc tangent",
                "atan2(y,x) - arc tangent with quadrant fix",
            ],
        },
        FunctionGroup {
            name: "hyperbolic",
            entries: &[
                "sinh(x) - hyperbolic sine",
                "cosh(x) - hyperbolic cosine",
                "tanh(x) - hyperbolic tangent",
                "asinh(x) - inverse hyperbolic sine",
                "acosh(x) - inverse hyperbolic cosine",
                "atanh(x) - inverse hyperbolic tangent",
            ],
        },
        FunctionGroup {
            name: "logarithmic",
            entries: &[
                "ln(x) - natural logarithm",
                "log(x) - natural logarithm",
                "log10(x) - logarithm base 10",
                "log2(x) - logarithm base 2",
                "exp(x) - exponential function (e^x)",
            ],
        },
        FunctionGroup {
            name: "mathematical",
            entries: &[
                "abs(x) - absolute value",
                "sqrt(x) - square root",
                "cbrt(x) - cube root",
                "pow(x,y) - raise x to the power of y",
                "hypot(x,y) - length of vector (x,y)",
                "round(x) - round to nearest integer",
                "round_decimal(x,y) - round x to y decimal places",
                "fmod(x,y) - floating point remainder of x/y",
                "remainder(x,y) - IEEE remainder of x/y",
            ],
        },
        FunctionGroup {
            name: "string",
            entries: &[
                "concat(s1,s2) - concatenate two strings",
                "length(s) - string length",
                "toupper(s) - convert to uppercase",
                "tolower(s) - convert to lowercase",
                "left(s,n) - get leftmost n characters",
                "right(s,n) - get rightmost n characters",
                "str2number(s) - convert string to number",
                "number(x) - convert value to number",
                "string(x) - convert value to string",
                "contains(s1,s2) - check if s1 contains s2",
                "link(text,url) - create HTML link",
                "default_value(val,default) - return default if val is null",
                "calculate(s) - evaluate equation in string",
            ],
        },
        FunctionGroup {
            name: "matrix",
            entries: &[
                "ones(rows,cols) - matrix of ones",
                "zeros(rows,cols) - matrix of zeros",
                "eye(n) - identity matrix",
                "size(matrix) - matrix dimensions",
            ],
        },
        FunctionGroup {
            name: "array",
            entries: &["sizeof(a) - number of elements in array"],
        },
        FunctionGroup {
            name: "date",
            entries: &[
                "current_date() - current date (YYYY-MM-DD)",
                "daysdiff(date1,date2) - difference in days",
                "hoursdiff(datetime1,datetime2) - difference in hours",
                "add_days(date,days) - add days to date",
                "weekyear(date) - week number of year",
                "weekday(date) - day of week (0=Sunday)",
            ],
        },
        FunctionGroup {
            name: "time",
            entries: &[
                "current_time() - current time (HH:MM:SS)",
                "current_time(offset) - current time with GMT offset",
                "timediff(time1,time2) - difference in hours",
            ],
        },
        FunctionGroup {
            name: "utility",
            entries: &[
                "mask(pattern,number) - apply formatting mask",
                "regex(text,pattern) - regex pattern matching",
                "parserid() - parser version information",
            ],
        },
        FunctionGroup {
            name: "comparison",
            entries: &[
                "> < >= <= (comparison operators)",
                "== != (equality operators)",
                "&& || (logical AND, OR)",
                "and or (alternative logical operators)",
                "! (logical NOT)",
                "& | (bitwise AND, OR)",
                "<< >> (bit shift operators)",
            ],
        },
        FunctionGroup {
            name: "conditional",
            entries: &["? : (ternary operator)", "condition ? true_value : false_value"],
        },
        FunctionGroup {
            name: "constants",
            entries: &[
                "pi - 3.14159...",
                "e - Euler's number (2.71828...)",
                "null - null value",
            ],
        },
        FunctionGroup {
            name: "aggregation",
            entries: &[
                "min(x1,x2,...) - minimum value",
                "max(x1,x2,...) - maximum value",
                "sum(x1,x2,...) - sum of all values",
                "avg(x1,x2,...) - average of all values",
            ],
        },
        FunctionGroup {
            name: "casting",
            entries: &[
                "(float) - cast to floating point",
                "(int) - cast to integer",
                "! (factorial) - postfix operator",
            ],
        },
    ]
});

/// The full catalog, grouped by category, in display order.
pub fn supported_functions() -> &'static [FunctionGroup] {
    &CATALOG
}

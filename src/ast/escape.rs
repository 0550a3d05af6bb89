use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::ast::RestoreFlag;

/// Which quote character an escaped literal is enclosed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeQuote {
    Single,
    Double,
}

/// ANSI words every dialect reserves, stored lowercase.
const SQL_RESERVED: &[&str] = &[
    "all", "alter", "and", "any", "array", "as", "asc", "at", "authorization",
    "begin", "between", "both", "by",
    "case", "cast", "check", "collate", "column", "commit", "constraint", "create", "cross", "cube", "current",
    "current_date", "current_time", "current_timestamp", "current_user",
    "default", "delete", "desc", "distinct", "drop",
    "else", "end", "escape", "except", "execute", "exists", "external",
    "false", "fetch", "filter", "for", "foreign", "from", "full", "function",
    "grant", "group", "grouping",
    "having",
    "if", "in", "index", "inner", "insert", "intersect", "interval", "into", "is",
    "join",
    "key",
    "leading", "left", "like", "limit", "local", "localtime", "localtimestamp",
    "match", "merge",
    "natural", "no", "not", "null",
    "of", "offset", "on", "only", "or", "order", "outer", "over",
    "partition", "primary", "procedure",
    "range", "references", "right", "rollback", "rollup", "row", "rows",
    "select", "session_user", "set", "some",
    "table", "tablesample", "then", "to", "trailing", "true", "truncate",
    "union", "unique", "unknown", "update", "user", "using",
    "values", "view",
    "when", "where", "window", "with",
];

/// MySQL additions, including the 8.0 window and CTE keywords.
const MYSQL_RESERVED: &[&str] = &[
    "accessible", "add", "analyze", "asensitive", "before", "bigint", "binary",
    "blob", "call", "cascade", "change", "char", "character", "condition",
    "continue", "convert", "cursor", "database", "databases", "day_hour", "day_microsecond",
    "day_minute", "day_second", "dec", "decimal", "declare", "delayed", "describe",
    "deterministic", "distinctrow", "div", "double", "dual", "each", "elseif",
    "enclosed", "escaped", "exit", "explain", "float", "float4", "float8", "force",
    "get", "high_priority", "hour_microsecond", "hour_minute", "hour_second",
    "ignore", "infile", "inout", "insensitive", "int", "int1", "int2", "int3",
    "int4", "int8", "integer", "iterate", "keys", "kill", "leave", "linear",
    "lines", "load", "lock", "long", "longblob", "longtext", "loop", "low_priority",
    "master_ssl_verify_server_cert", "maxvalue", "mediumblob", "mediumint", "mediumtext",
    "middleint", "minute_microsecond", "minute_second", "mod", "modifies", "no_write_to_binlog",
    "numeric", "optimize", "option", "optionally", "out", "outfile", "precision",
    "purge", "read", "reads", "real", "regexp", "release", "rename", "repeat",
    "replace", "require", "resignal", "restrict", "return", "revoke", "rlike",
    "schema", "schemas", "second_microsecond", "sensitive", "separator", "show",
    "signal", "smallint", "spatial", "specific", "sql", "sql_big_result",
    "sql_calc_found_rows", "sql_small_result", "sqlexception", "sqlstate", "sqlwarning",
    "ssl", "starting", "straight_join", "terminated", "text", "tinyblob", "tinyint",
    "tinytext", "trigger", "undo", "unlock", "unsigned", "usage", "use", "utc_date",
    "utc_time", "utc_timestamp", "varbinary", "varchar", "varcharacter", "varying",
    "while", "write", "xor", "year_month", "zerofill",
    "cume_dist", "dense_rank", "empty", "first_value", "groups", "json_table", "lag", "last_value",
    "lateral", "lead", "nth_value", "ntile", "percent_rank", "rank", "recursive", "row_number",
    "system",
];

/// Longest entry in the reserved lists; anything longer is never reserved.
const MAX_RESERVED_LEN: usize = 32;

static RESERVED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SQL_RESERVED.iter().chain(MYSQL_RESERVED).copied().collect());

/// Case-insensitive lookup in the MySQL reserved-word set.
pub fn is_reserved(word: &str) -> bool {
    if word.len() > MAX_RESERVED_LEN {
        return false;
    }
    let mut buf = [0u8; MAX_RESERVED_LEN];
    let lower = &mut buf[..word.len()];
    lower.copy_from_slice(word.as_bytes());
    lower.make_ascii_lowercase();
    std::str::from_utf8(lower).is_ok_and(|w| RESERVED.contains(w))
}

/// Whether `id` can be written without backticks.
pub fn is_plain_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !is_reserved(id)
}

/// Appends `s` with MySQL backslash escapes applied.
pub fn write_escape(sb: &mut String, s: &str, quote: EscapeQuote) {
    for c in s.chars() {
        match c {
            '\0' => sb.push_str("\\0"),
            '\n' => sb.push_str("\\n"),
            '\r' => sb.push_str("\\r"),
            '\\' => sb.push_str("\\\\"),
            '\x1a' => sb.push_str("\\Z"),
            '\'' if quote == EscapeQuote::Single => sb.push_str("\\'"),
            '"' if quote == EscapeQuote::Double => sb.push_str("\\\""),
            c => sb.push(c),
        }
    }
}

/// Appends a single-quoted string literal.
pub fn write_string_literal(sb: &mut String, s: &str) {
    sb.reserve(s.len() + 2);
    sb.push('\'');
    write_escape(sb, s, EscapeQuote::Single);
    sb.push('\'');
}

/// Appends an identifier, backtick-quoting it when required or requested.
pub fn write_id(sb: &mut String, id: &str, flag: RestoreFlag) {
    if !flag.has(RestoreFlag::QUOTE_IDENTIFIERS) && is_plain_identifier(id) {
        sb.push_str(id);
        return;
    }

    sb.push('`');
    for c in id.chars() {
        if c == '`' {
            sb.push('`');
        }
        sb.push(c);
    }
    sb.push('`');
}

#[cfg(test)]
mod tests {
    use crate::ast::{escape::{is_plain_identifier, is_reserved, write_escape, write_id, write_string_literal, EscapeQuote}, RestoreFlag};

    fn id(text: &str, flag: RestoreFlag) -> String {
        let mut sb = String::new();
        write_id(&mut sb, text, flag);
        sb
    }

    #[test]
    pub fn test_plain_identifier() {
        assert!(is_plain_identifier("user_id"));
        assert!(is_plain_identifier("$tmp"));
        assert!(is_plain_identifier("colA"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("1abc"));
        assert!(!is_plain_identifier("first name"));
        assert!(!is_plain_identifier("select"));
        assert!(!is_plain_identifier("Order"));
    }

    #[test]
    pub fn test_write_id_bare() {
        assert_eq!(id("student", RestoreFlag::DEFAULT), "student");
    }

    #[test]
    pub fn test_write_id_quotes_when_required() {
        assert_eq!(id("order", RestoreFlag::DEFAULT), "`order`");
        assert_eq!(id("my col", RestoreFlag::DEFAULT), "`my col`");
        assert_eq!(id("a`b", RestoreFlag::DEFAULT), "`a``b`");
    }

    #[test]
    pub fn test_mysql80_keywords_are_quoted() {
        let words = [
            "rank", "window", "over", "system", "lateral", "read", "write", "usage", "option", "condition",
            "return", "separator", "kill", "load", "lines", "real", "unlock", "dense_rank", "row_number", "lag",
            "lead", "cume_dist", "ntile", "percent_rank", "first_value", "last_value", "nth_value", "empty",
            "json_table", "of", "grouping", "cube", "recursive", "except", "intersect", "second_microsecond",
        ];

        for word in words {
            assert!(is_reserved(word), "{} should be reserved", word);
            assert_eq!(id(word, RestoreFlag::DEFAULT), format!("`{}`", word));
        }
    }

    #[test]
    pub fn test_reserved_lookup_ignores_case() {
        assert!(is_reserved("RANK"));
        assert!(is_reserved("Window"));
        assert!(!is_reserved("student"));
        assert!(!is_reserved("a_column_name_longer_than_any_reserved_word"));
        assert!(!is_reserved("r\u{e9}ank"));
    }

    #[test]
    pub fn test_every_interval_unit_keyword_is_reserved_when_compound() {
        for unit in ["day_hour", "day_microsecond", "day_minute", "day_second", "hour_microsecond", "hour_minute",
            "hour_second", "minute_microsecond", "minute_second", "second_microsecond", "year_month"] {
            assert!(is_reserved(unit), "{} should be reserved", unit);
        }
    }

    #[test]
    pub fn test_write_id_forced_quotes() {
        assert_eq!(id("student", RestoreFlag::QUOTE_IDENTIFIERS), "`student`");
    }

    #[test]
    pub fn test_write_escape_control_chars() {
        let mut sb = String::new();
        write_escape(&mut sb, "a\0b\nc\rd\\e\x1a", EscapeQuote::Single);

        assert_eq!(sb, "a\\0b\\nc\\rd\\\\e\\Z");
    }

    #[test]
    pub fn test_write_escape_only_matching_quote() {
        let mut single = String::new();
        write_escape(&mut single, "it's \"x\"", EscapeQuote::Single);
        assert_eq!(single, "it\\'s \"x\"");

        let mut double = String::new();
        write_escape(&mut double, "it's \"x\"", EscapeQuote::Double);
        assert_eq!(double, "it's \\\"x\\\"");
    }

    #[test]
    pub fn test_write_string_literal() {
        let mut sb = String::new();
        write_string_literal(&mut sb, "a'b");

        assert_eq!(sb, "'a\\'b'");
    }
}

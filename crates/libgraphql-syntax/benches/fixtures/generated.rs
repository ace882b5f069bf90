use std::fmt::Write;

/// Generates a query with deeply nested selection sets.
///
/// Each level selects an `id` field and a `child` field holding the next
/// level. The innermost level selects `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        writeln!(out, "{indent}{field} {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}name", "  ".repeat(depth + 1)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level + 1)).unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    name").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a schema with `types` object types of `fields` fields each,
/// plus one enum, input object and union per ten object types.
pub fn synthetic_schema(types: usize, fields: usize) -> String {
    let mut out = String::with_capacity(types * fields * 40);
    out.push_str("schema { query: Type0 }\n\n");
    for t in 0..types {
        writeln!(out, "\"\"\"\nObject type number {t}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{t} implements Node @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        for f in 0..fields {
            let next = (t + f + 1) % types;
            writeln!(
                out,
                "  \"field {f}\" field{f}(first: Int = 10, after: String): [Type{next}!]!",
            )
            .unwrap();
        }
        out.push_str("}\n\n");

        if t % 10 == 0 {
            writeln!(out, "enum Enum{t} {{ ALPHA BETA GAMMA DELTA }}").unwrap();
            writeln!(
                out,
                "input Input{t} {{ id: ID!, tags: [String!] = [\"a\", \"b\"], nested: Input{t} }}",
            )
            .unwrap();
            writeln!(out, "union Union{t} = | Type{t} | Type0\n").unwrap();
        }
    }
    out.push_str("interface Node { id: ID! }\n");
    out.push_str("directive @key(fields: String!) repeatable on OBJECT | INTERFACE\n");
    out
}

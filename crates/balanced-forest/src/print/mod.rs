//! Box-drawing tree dumps used by the `Display` impls.

/// Renders one child subtree given the indentation prefix of its lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Joins child renderings under a parent line.
///
/// `None` entries are skipped; the last present child gets the closing
/// branch glyph.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Dumps a binary subtree: each node prints `label(handle)`, absent
/// children print `∅`.
pub fn print_binary<F, G>(tab: &str, node: Option<u32>, children: &G, label: &F) -> String
where
    F: Fn(u32) -> String,
    G: Fn(u32) -> (Option<u32>, Option<u32>),
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let (l, r) = children(i);
    if l.is_none() && r.is_none() {
        return label(i);
    }
    let left = |tab: &str| print_binary(tab, l, children, label);
    let right = |tab: &str| print_binary(tab, r, children, label);
    format!("{}{}", label(i), print_tree(tab, &[Some(&left), Some(&right)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_nested_children() {
        let leaf = |_: &str| "leaf".to_string();
        let nested = |tab: &str| format!("inner{}", print_tree(tab, &[Some(&leaf)]));
        let out = print_tree("", &[Some(&nested), None, Some(&leaf)]);
        assert_eq!(out, "\n├─ inner\n│  └─ leaf\n└─ leaf");
    }

    #[test]
    fn empty_children_print_nothing() {
        assert_eq!(print_tree("", &[None, None]), "");
    }
}

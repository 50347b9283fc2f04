use std::fmt::Display;

/// 用参数替换消息模板中的 `{0}`、`{1}` 等占位符
///
/// `{{` 和 `}}` 表示字面量花括号。索引越界或没有闭合的占位符原样保留，
/// 翻译中的错误不会让程序退出。
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tail.find('}') else {
            tracing::warn!(template, "unterminated placeholder in message");
            out.push_str(tail);
            return out;
        };

        let placeholder = &tail[..=end];
        match tail[1..end].trim().parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => {
                tracing::warn!(template, placeholder, "placeholder has no matching argument");
                out.push_str(placeholder);
            }
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

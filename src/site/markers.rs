use super::SiteError;

fn start_marker(name: &str) -> String {
    format!("<!-- folio:{}:start -->", name)
}

fn end_marker(name: &str) -> String {
    format!("<!-- folio:{}:end -->", name)
}

/// Replace everything between the `name` start/end markers with `content`.
///
/// Content lines are indented to match the end marker, so rewriting the same
/// content twice yields identical output.
pub fn replace_region(html: &str, name: &str, content: &str) -> Result<String, SiteError> {
    let start = start_marker(name);
    let end = end_marker(name);

    let start_idx = html
        .find(&start)
        .ok_or_else(|| SiteError::MissingMarker(start.clone()))?;
    let body_idx = start_idx + start.len();
    let end_idx = html[body_idx..]
        .find(&end)
        .map(|i| body_idx + i)
        .ok_or_else(|| SiteError::MissingMarker(end.clone()))?;

    let line_start = html[..end_idx].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let indent: String = html[line_start..end_idx]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let mut out = String::with_capacity(html.len() + content.len());
    out.push_str(&html[..body_idx]);
    out.push('\n');
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(&indent);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&indent);
    out.push_str(&html[end_idx..]);
    Ok(out)
}

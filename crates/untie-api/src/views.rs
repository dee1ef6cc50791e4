//! Minimal server-rendered HTML pages.
//!
//! Every interpolated value goes through [`escape`].

use std::fmt::Write;

use axum::http::StatusCode;

use untie_entity::project::Project;
use untie_entity::user::User;

/// Escapes text for safe inclusion in HTML content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, user: Option<&User>, body: &str) -> String {
    let nav = match user {
        Some(user) => format!(
            r#"<nav><a href="/">Dashboard</a> <a href="/projects">Projects</a> <span>{}</span> <a href="/auth/logout">Log out</a></nav>"#,
            escape(&user.name)
        ),
        None => r#"<nav><a href="/auth/login">Log in</a> <a href="/auth/register">Register</a></nav>"#
            .to_string(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{} | Un-tie.me</title></head>\n<body>\n{nav}\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        escape(title)
    )
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<p class="error" role="alert">{}</p>"#, escape(e)))
        .unwrap_or_default()
}

/// Login form.
pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
{}
<form method="post" action="/auth/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<label><input type="checkbox" name="remember_me"> Remember me</label>
<button type="submit">Log in</button>
</form>
<p>No account? <a href="/auth/register">Register</a></p>"#,
        error_banner(error)
    );
    layout("Log in", None, &body)
}

/// Registration form.
pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Create an account</h1>
{}
<form method="post" action="/auth/register">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Register</button>
</form>"#,
        error_banner(error)
    );
    layout("Register", None, &body)
}

fn project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "<p>No projects yet.</p>".to_string();
    }
    let mut out = String::from("<ul>");
    for p in projects {
        let _ = write!(
            out,
            r#"<li><a href="/projects/{}">{}</a></li>"#,
            p.id,
            escape(&p.name)
        );
    }
    out.push_str("</ul>");
    out
}

/// Landing page with the most recently updated projects.
pub fn dashboard(user: &User, recent: &[Project], features: &[&str]) -> String {
    let enabled = if features.is_empty() {
        "none".to_string()
    } else {
        escape(&features.join(", "))
    };
    let body = format!(
        "<h1>Welcome, {}</h1>\n<h2>Recent projects</h2>\n{}\n<p><a href=\"/projects\">All projects</a></p>\n<p>Workspace features: {enabled}</p>",
        escape(&user.name),
        project_list(recent)
    );
    layout("Dashboard", Some(user), &body)
}

/// The caller's projects with a creation form.
pub fn projects_page(user: &User, projects: &[Project], error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Projects</h1>
{}
{}
<h2>New project</h2>
<form method="post" action="/projects">
<label>Name <input type="text" name="name" required maxlength="200"></label>
<label>Description <textarea name="description"></textarea></label>
<button type="submit">Create</button>
</form>"#,
        error_banner(error),
        project_list(projects)
    );
    layout("Projects", Some(user), &body)
}

/// A single project with links to its enabled feature pages.
pub fn project_detail(user: &User, project: &Project, features: &[&str]) -> String {
    let mut links = String::new();
    for f in features {
        let _ = write!(
            links,
            r#"<li><a href="/projects/{}/{f}">{}</a></li>"#,
            project.id,
            escape(&f.replace('_', " "))
        );
    }

    let mut feature_rows = String::new();
    for f in &project.features {
        let status = f
            .versions
            .last()
            .map(|v| format!("{} ({})", v.version, v.status))
            .unwrap_or_else(|| "unversioned".to_string());
        let _ = write!(
            feature_rows,
            "<li>{}: {}</li>",
            escape(&f.name),
            escape(&status)
        );
    }

    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<h2>Features</h2>\n<ul>{feature_rows}</ul>\n<h2>Workspace</h2>\n<ul>{links}</ul>\n<p>Updated {}</p>",
        escape(&project.name),
        escape(&project.description),
        project.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    layout(&project.name, Some(user), &body)
}

/// Placeholder page for an optional project workspace feature.
pub fn feature_page(user: &User, project: &Project, feature: &str) -> String {
    let title = feature.replace('_', " ");
    let body = format!(
        r#"<h1>{}</h1>
<p>Project: <a href="/projects/{}">{}</a></p>"#,
        escape(&title),
        project.id,
        escape(&project.name)
    );
    layout(&title, Some(user), &body)
}

/// Error page for failed page requests.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to dashboard</a></p>",
        status.as_u16(),
        escape(message)
    );
    layout(status.canonical_reason().unwrap_or("Error"), None, &body)
}

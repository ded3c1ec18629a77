//! `/admin` panel
//!
//! INTENTIONALLY INSECURE: a single static password in the query string
//! unlocks raw shell execution, and command output is embedded unescaped.

use crate::error::{HandlerError, HandlerResult};
use crate::handler::{execute_command, RequestContext};
use crate::http;
use crate::insecure;
use crate::logger;

const EXEC_RESULT_PREFIX: &[u8] = b"<h1>Command Execution Result:</h1><pre>";
const EXEC_RESULT_SUFFIX: &[u8] = b"</pre>";

fn admin_panel(password: &str) -> String {
    format!(
        r#"<h1>Welcome, Admin!</h1>
<p>Here are some secret server files:</p>
<ul>
    <li><a href="/read?file=secret.txt">secret.txt</a></li>
    <li><a href="/read?file=passwords.txt">passwords.txt</a></li>
</ul>
<p>Use /admin?auth={password}&exec=command to run commands.</p>"#
    )
}

pub async fn handle(ctx: &RequestContext<'_>) -> HandlerResult {
    let password = ctx.state.secrets.admin();
    if !insecure::insecure_password_eq(ctx.query.get("auth"), password) {
        logger::log_warning(&format!(
            "Unauthorized access attempt to admin panel from {}",
            ctx.peer_addr
        ));
        return Err(HandlerError::Unauthorized("Unauthorized access".to_string()));
    }

    let command = ctx.query.get("exec");
    if command.is_empty() {
        logger::log_action("Admin accessed the panel");
        return Ok(http::build_html_response(admin_panel(password)));
    }

    let output = execute_command(&ctx.state.shell, command).await?;
    logger::log_action(&format!("Executed command by admin: {command}"));
    // Output goes out byte for byte, even when it isn't UTF-8
    let mut page =
        Vec::with_capacity(EXEC_RESULT_PREFIX.len() + output.len() + EXEC_RESULT_SUFFIX.len());
    page.extend_from_slice(EXEC_RESULT_PREFIX);
    page.extend_from_slice(&output);
    page.extend_from_slice(EXEC_RESULT_SUFFIX);
    Ok(http::build_html_response(page))
}

//! `/` landing page

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::RequestContext;
use crate::http;

const HOME_PAGE: &str = r#"<html>
    <head><title>Hackable Server</title></head>
    <body>
        <h1>Welcome to the Advanced Hackable Server</h1>
        <p>Endpoints to explore:</p>
        <ul>
            <li>/upload - Upload files</li>
            <li>/read?file=filename - Read files or execute commands</li>
            <li>/admin - Secret admin panel</li>
            <li>/echo?msg=yourmessage - Echo your message</li>
            <li>/api/secrets - Access secret values</li>
        </ul>
    </body>
</html>"#;

pub fn handle(_ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_html_response(HOME_PAGE.to_string())
}

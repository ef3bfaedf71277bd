use csp_manager::{
    compile_header, compile_report_to, DirectiveName, PolicyConfigBuilder, PolicyMode,
};

fn main() {
    println!("CSP Manager");

    let config = PolicyConfigBuilder::new()
        .mode(PolicyMode::Enforce)
        .directive(DirectiveName::DefaultSrc, "'self'")
        .directive(DirectiveName::ScriptSrc, "'self' https://cdn.example.com")
        .directive(DirectiveName::ImgSrc, "'self' data:")
        .report_to(r#"{"group":"csp-endpoint","max_age":10886400}"#)
        .build();

    match compile_header(&config) {
        Ok(Some((name, value))) => {
            println!("{}: {}", name, value.to_str().unwrap_or_default())
        }
        Ok(None) => println!("policy disabled, no header"),
        Err(e) => eprintln!("compile failed: {}", e),
    }

    match compile_report_to(&config) {
        Ok(Some((name, value))) => {
            println!("{}: {}", name, value.to_str().unwrap_or_default())
        }
        Ok(None) => {}
        Err(e) => eprintln!("compile failed: {}", e),
    }
}

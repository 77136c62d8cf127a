use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::feedback::{ToastKind, ToastService};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(fields), Some(extra)) = (response.as_object_mut(), data.as_ref().and_then(Value::as_object)) {
                fields.extend(extra.clone());
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "success": false,
                    "error": message
                }))?
            );
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output a record or collection, pretty JSON in both modes. List views in
/// the dashboard render tables; the CLI leaves shaping to the caller's jq.
pub fn output_data<T: Serialize>(output_format: &OutputFormat, data: &T) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json | OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

/// Print and clear the toasts a command's requests produced.
pub fn flush_toasts(toasts: &ToastService, output_format: &OutputFormat) {
    for toast in toasts.drain() {
        match output_format {
            OutputFormat::Json => {}
            OutputFormat::Text => match toast.kind {
                ToastKind::Success => println!("✓ {}", toast.message),
                ToastKind::Error => eprintln!("✗ {}", toast.message),
                ToastKind::Info => println!("• {}", toast.message),
            },
        }
    }
}

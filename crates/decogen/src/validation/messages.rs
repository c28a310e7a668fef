//! The shared validation message catalog.
//!
//! A fixed TypeScript source materialized next to the generated file
//! whenever generated code references [`COMMON_VALIDATION_MESSAGES_CLASS_NAME`].
//! The content never varies, so re-runs are byte-identical.

pub const COMMON_VALIDATION_MESSAGES_CLASS_NAME: &str = "CommonValidationMessages";
pub const COMMON_VALIDATION_MESSAGES_FILE_NAME: &str = "CommonValidationMessages.ts";

pub const COMMON_VALIDATION_MESSAGES_SOURCE_CODE: &str = r"export class CommonValidationMessages {

    static Max(max: number): string {
        return `must not be greater than ${max}`;
    }

    static Min(min: number): string {
        return `must not be less than ${min}`;
    }

    static MaxLength(max: number): string {
        return `length must not be greater than ${max}`;
    }

    static MinLength(min: number): string {
        return `length must not be less than ${min}`;
    }

    static ArrayMaxSize(max: number): string {
        return `size must not be greater than ${max}`;
    }

    static ArrayMinSize(min: number): string {
        return `size must not be less than ${min}`;
    }

    static IsNotEmpty(): string {
        return 'must not be empty';
    }

    static IsDefined(): string {
        return 'must not be null or undefined';
    }
}
";

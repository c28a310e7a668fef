//! Localization scaffolding.
//!
//! Materialized only when generated decorators use localized messages
//! ([`MessageStyle::Localized`](super::MessageStyle)). Consumers register
//! their translated templates at runtime; untranslated keys fall back to the
//! key itself.

pub const LOCALIZATION_CLASS_NAME: &str = "Localization";
pub const LOCALIZATION_FILE_NAME: &str = "Localization.ts";

pub const LOCALIZATION_SOURCE_CODE: &str = r"export class Localization {

    private static messages: { [key: string]: string } = {};

    static register(messages: { [key: string]: string }): void {
        Object.assign(Localization.messages, messages);
    }

    static getMessage(key: string, ...args: (string | number)[]): string {
        const template = Localization.messages[key];
        if (!template) {
            return key;
        }
        return args.reduce<string>(
            (message, arg, index) => message.replace(`{${index}}`, String(arg)),
            template,
        );
    }
}
";

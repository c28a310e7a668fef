//! Integration tests for the full generation pipeline.

use decogen::validation::messages::{
    COMMON_VALIDATION_MESSAGES_FILE_NAME, COMMON_VALIDATION_MESSAGES_SOURCE_CODE,
};
use decogen::{
    CustomAnnotation, GenerateError, GeneratorConfig, MessageStyle, ResolveError, TypeResolver,
    TypeScriptFileGenerator,
};
use decogen_engine::ir::{Annotation, ClassDef, ClassGraph, EnumDef, FieldDef, TsType};
use std::fs;
use tempfile::TempDir;

fn max_graph() -> ClassGraph {
    let mut graph = ClassGraph::new();
    graph.add_class(
        ClassDef::new("Foo").field(FieldDef::new("bar", TsType::Any).annotate(Annotation::Max(1))),
    );
    graph
}

fn generator_in(dir: &TempDir) -> TypeScriptFileGenerator {
    TypeScriptFileGenerator::new(GeneratorConfig {
        base_path: dir.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn max_value_scenario() {
    let dir = TempDir::new().unwrap();
    let files = generator_in(&dir).generate(&max_graph()).unwrap();

    assert_eq!(
        files.code,
        "// Generated by decogen. Do not edit.\n\
         \n\
         import { CommonValidationMessages } from './CommonValidationMessages';\n\
         import { Max } from 'class-validator';\n\
         \n\
         export class Foo {\n\
         \x20   @Max(1, { message: CommonValidationMessages.Max(1) })\n\
         \x20   bar: any;\n\
         }\n"
    );

    assert_eq!(fs::read_to_string(&files.primary).unwrap(), files.code);

    // The shared catalog is materialized, byte-identical to the canonical
    // source; the localization scaffold is not.
    let catalog = dir.path().join(COMMON_VALIDATION_MESSAGES_FILE_NAME);
    assert_eq!(
        fs::read_to_string(&catalog).unwrap(),
        COMMON_VALIDATION_MESSAGES_SOURCE_CODE
    );
    assert!(!dir.path().join("Localization.ts").exists());
    assert_eq!(files.extras, vec![catalog]);
}

#[test]
fn zero_annotations_produce_no_auxiliary_files() {
    let dir = TempDir::new().unwrap();
    let mut graph = ClassGraph::new();
    graph.add_class(ClassDef::new("Plain").field(FieldDef::new("name", TsType::String)));

    let files = generator_in(&dir).generate(&graph).unwrap();

    assert!(files.extras.is_empty());
    assert!(!dir.path().join(COMMON_VALIDATION_MESSAGES_FILE_NAME).exists());
    assert!(!dir.path().join("Localization.ts").exists());
    assert!(!files.code.contains("import"));
}

#[test]
fn consecutive_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);

    let first = generator.generate(&max_graph()).unwrap();
    let first_catalog =
        fs::read_to_string(dir.path().join(COMMON_VALIDATION_MESSAGES_FILE_NAME)).unwrap();

    let second = generator.generate(&max_graph()).unwrap();
    let second_catalog =
        fs::read_to_string(dir.path().join(COMMON_VALIDATION_MESSAGES_FILE_NAME)).unwrap();

    assert_eq!(first.code, second.code);
    assert_eq!(first_catalog, second_catalog);
    assert_eq!(
        fs::read_to_string(&first.primary).unwrap(),
        fs::read_to_string(&second.primary).unwrap()
    );
}

fn message_hierarchy_graph() -> ClassGraph {
    let mut graph = ClassGraph::new();
    graph.add_enum(EnumDef::string_enum("Channel", vec!["SMS", "VIBER"]));
    graph.add_class(
        ClassDef::new("OutboundMessage")
            .field(FieldDef::new("channel", TsType::Ref("Channel".into()))),
    );
    graph.add_class(
        ClassDef::new("SmsMessage")
            .extends("OutboundMessage")
            .field(FieldDef::new("channel", TsType::Ref("Channel".into())))
            .field(FieldDef::new("text", TsType::String).annotate(Annotation::Size {
                min: None,
                max: Some(160),
            })),
    );
    graph.add_class(
        ClassDef::new("ViberMessage")
            .extends("OutboundMessage")
            .field(FieldDef::new("text", TsType::String)),
    );
    graph.add_class(
        ClassDef::new("MessageBatch").field(
            FieldDef::new(
                "messages",
                TsType::Array(Box::new(TsType::Ref("OutboundMessage".into()))),
            )
            .annotate(Annotation::Valid),
        ),
    );
    graph
}

fn channel_resolver() -> TypeResolver {
    TypeResolver::from_tags(
        "OutboundMessage",
        "channel",
        &[("SmsMessage", "SMS"), ("ViberMessage", "VIBER")],
    )
}

#[test]
fn polymorphic_hierarchy_end_to_end() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir).with_resolver(channel_resolver());

    let files = generator.generate(&message_hierarchy_graph()).unwrap();

    insta::assert_snapshot!(files.code, @r"
// Generated by decogen. Do not edit.

import { Type } from 'class-transformer';
import { CommonValidationMessages } from './CommonValidationMessages';
import { ValidateNested, MaxLength } from 'class-validator';

export enum Channel {
    SMS = 'SMS',
    VIBER = 'VIBER'
}

export class MessageBatch {
    @Type(() => Object, { discriminator: { property: 'channel', subTypes: [{ value: SmsMessage, name: 'SMS' }, { value: ViberMessage, name: 'VIBER' }] }, keepDiscriminatorProperty: true })
    @ValidateNested({ each: true })
    messages: OutboundMessage[];
}

export class OutboundMessage {
    channel: Channel;
}

export class SmsMessage extends OutboundMessage {
    readonly channel: 'SMS' = 'SMS';
    @MaxLength(160, { message: CommonValidationMessages.MaxLength(160) })
    text: string;
}

export class ViberMessage extends OutboundMessage {
    readonly channel: 'VIBER' = 'VIBER';
    text: string;
}
");
}

#[test]
fn discriminant_collision_fails_before_any_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let generator = TypeScriptFileGenerator::new(GeneratorConfig {
        base_path: out.clone(),
        ..Default::default()
    })
    .unwrap()
    .with_resolver(TypeResolver::from_tags(
        "OutboundMessage",
        "channel",
        &[("SmsMessage", "A"), ("ViberMessage", "A")],
    ));

    let err = generator
        .generate(&message_hierarchy_graph())
        .unwrap_err();

    match err {
        GenerateError::Resolve(ResolveError::DiscriminantCollision {
            base,
            tag,
            first,
            second,
        }) => {
            assert_eq!(base, "OutboundMessage");
            assert_eq!(tag, "A");
            assert_eq!(first, "SmsMessage");
            assert_eq!(second, "ViberMessage");
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert!(!out.exists(), "nothing may be written on collision");
}

#[test]
fn localized_style_materializes_the_scaffold() {
    let dir = TempDir::new().unwrap();
    let generator = TypeScriptFileGenerator::new(GeneratorConfig {
        base_path: dir.path().to_path_buf(),
        message_style: MessageStyle::Localized,
        ..Default::default()
    })
    .unwrap();

    let files = generator.generate(&max_graph()).unwrap();

    assert!(files
        .code
        .contains("@Max(1, { message: Localization.getMessage('Max', 1) })"));
    assert!(files
        .code
        .contains("import { Localization } from './Localization';"));
    assert!(dir.path().join("Localization.ts").exists());
    assert!(!dir.path().join(COMMON_VALIDATION_MESSAGES_FILE_NAME).exists());
}

fn phone_graph() -> ClassGraph {
    let mut graph = ClassGraph::new();
    graph.add_class(
        ClassDef::new("Contact").field(
            FieldDef::new("phone", TsType::String).annotate(Annotation::Custom {
                qualified_name: "com.example.validation.PhoneNumber".into(),
            }),
        ),
    );
    graph
}

fn phone_config(out: &TempDir, decorators: &TempDir) -> GeneratorConfig {
    GeneratorConfig {
        base_path: out.path().to_path_buf(),
        custom_decorator_root: Some(decorators.path().to_path_buf()),
        custom_annotations: vec![CustomAnnotation {
            qualified_name: "com.example.validation.PhoneNumber".into(),
            decorator_name: "IsPhoneNumber".into(),
        }],
        ..Default::default()
    }
}

#[test]
fn referenced_custom_decorator_is_emitted_and_copied() {
    let out = TempDir::new().unwrap();
    let decorators = TempDir::new().unwrap();
    fs::create_dir_all(decorators.path().join("validators")).unwrap();
    let source = "export function IsPhoneNumber() {\n    return () => undefined;\n}\n";
    fs::write(
        decorators.path().join("validators/IsPhoneNumber.ts"),
        source,
    )
    .unwrap();

    let generator = TypeScriptFileGenerator::new(phone_config(&out, &decorators)).unwrap();
    let files = generator.generate(&phone_graph()).unwrap();

    assert_eq!(
        files.code,
        "// Generated by decogen. Do not edit.\n\
         \n\
         import { IsPhoneNumber } from './validators/IsPhoneNumber';\n\
         \n\
         export class Contact {\n\
         \x20   @IsPhoneNumber()\n\
         \x20   phone: string;\n\
         }\n"
    );

    let copied = out.path().join("validators/IsPhoneNumber.ts");
    assert_eq!(fs::read_to_string(&copied).unwrap(), source);
    assert_eq!(files.extras, vec![copied]);
}

#[test]
fn missing_custom_decorator_source_is_fatal() {
    let out = TempDir::new().unwrap();
    let decorators = TempDir::new().unwrap();
    let source_path = decorators.path().join("IsPhoneNumber.ts");
    fs::write(&source_path, "export function IsPhoneNumber() {}").unwrap();

    let generator = TypeScriptFileGenerator::new(phone_config(&out, &decorators)).unwrap();
    // The file disappears between extraction and copy.
    fs::remove_file(&source_path).unwrap();

    let err = generator.generate(&phone_graph()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::MissingDecoratorSource { ref name, .. } if name == "IsPhoneNumber"
    ));
}

#[test]
fn unregistered_custom_annotation_is_silently_skipped() {
    let dir = TempDir::new().unwrap();
    let mut graph = ClassGraph::new();
    graph.add_class(
        ClassDef::new("Contact").field(
            FieldDef::new("phone", TsType::String).annotate(Annotation::Custom {
                qualified_name: "com.example.Unknown".into(),
            }),
        ),
    );

    let files = generator_in(&dir).generate(&graph).unwrap();
    assert!(!files.code.contains('@'));
    assert!(files.extras.is_empty());
}

#![no_main]

use dotnames::{
    core::ToCoReName,
    names::{codec, LambdaName, MethodName, ParameterName, PropertyName, TypeName},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let ty = TypeName::new(input);
    let _ = ty.name();
    let _ = ty.namespace();
    let _ = ty.declaring_type();
    let _ = ty.type_parameters();
    let _ = ty.array_base_type();
    let _ = ty.without_type_arguments();
    let _ = ty.to_core_name();

    let method = MethodName::new(input);
    let _ = method.return_type();
    let _ = method.declaring_type();
    let _ = method.parameters();
    let _ = method.type_parameters();
    let _ = method.is_extension_method();
    let _ = method.without_type_arguments();
    let _ = method.to_core_name();

    let property = PropertyName::new(input);
    let _ = property.name();
    let _ = property.parameters();

    let parameter = ParameterName::new(input);
    let _ = parameter.value_type();
    let _ = parameter.is_passed_by_reference();

    let _ = LambdaName::new(input).parameters();
    let _ = codec::deserialize(input);
});

use super::*;

#[test]
fn test_resolve_defaults() {
    let none = ActivationParams::default();
    assert_eq!(Activation::resolve("relu", &none).unwrap(), Activation::Relu);
    assert_eq!(Activation::resolve("linear", &none).unwrap(), Activation::Linear);
    assert_eq!(
        Activation::resolve("leaky_relu", &none).unwrap(),
        Activation::LeakyRelu { alpha: 0.01 }
    );
    assert_eq!(Activation::resolve("elu", &none).unwrap(), Activation::Elu { alpha: 1.0 });
    assert_eq!(Activation::resolve("swish", &none).unwrap(), Activation::Swish { beta: 1.0 });
    assert_eq!(
        Activation::resolve("softplus", &none).unwrap(),
        Activation::Softplus { beta: 1.0 }
    );
}

#[test]
fn test_resolve_with_params_and_case() {
    let params = ActivationParams::new().with_alpha(0.2);
    assert_eq!(
        Activation::resolve("  Leaky_ReLU ", &params).unwrap(),
        Activation::LeakyRelu { alpha: 0.2 }
    );
    let params = ActivationParams::new().with_beta(2.5);
    assert_eq!(
        Activation::resolve("SWISH", &params).unwrap(),
        Activation::Swish { beta: 2.5 }
    );
}

#[test]
fn test_every_supported_name_resolves() {
    for name in SUPPORTED_ACTIVATIONS {
        let activation: Activation = name.parse().unwrap();
        assert_eq!(activation.name(), name);
    }
}

#[test]
fn test_unknown_activation() {
    let err = Activation::resolve("bogus", &ActivationParams::default()).unwrap_err();
    match &err {
        ScalarGradError::UnknownActivation { name, supported } => {
            assert_eq!(name, "bogus");
            assert_eq!(supported.len(), SUPPORTED_ACTIVATIONS.len());
            assert!(supported.iter().any(|s| s == "gelu"));
        }
        other => panic!("Expected UnknownActivation, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("'bogus'"), "{}", message);
    assert!(message.contains("softplus"), "{}", message);
}

#[test]
fn test_unexpected_parameter() {
    let err = Activation::resolve("relu", &ActivationParams::new().with_alpha(0.1)).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::UnexpectedActivationParameter {
            activation: "relu".to_string(),
            parameter: "alpha".to_string(),
        }
    );
    let err = Activation::resolve("elu", &ActivationParams::new().with_beta(2.0)).unwrap_err();
    assert!(matches!(
        err,
        ScalarGradError::UnexpectedActivationParameter { ref parameter, .. } if parameter == "beta"
    ));
}

#[test]
fn test_apply_dispatches_to_matching_op() {
    let x = Value::new(-2.0);
    let cases = [
        (Activation::Relu, "ReLU"),
        (Activation::LeakyRelu { alpha: 0.1 }, "LeakyReLU(0.1)"),
        (Activation::Elu { alpha: 1.0 }, "ELU(1)"),
        (Activation::Sigmoid, "sigmoid"),
        (Activation::Swish { beta: 1.0 }, "Swish(1)"),
        (Activation::Softplus { beta: 1.0 }, "Softplus(1)"),
        (Activation::Gelu, "GELU"),
    ];
    for (activation, tag) in cases {
        let out = x.activate(&activation);
        assert_eq!(out.op(), tag);
        assert!(out.operands()[0].ptr_eq(&x));
    }
}

#[test]
fn test_linear_is_identity() {
    let x = Value::new(3.0);
    let out = x.activate(&Activation::Linear);
    assert!(out.ptr_eq(&x));
}

#[test]
fn test_display() {
    assert_eq!(Activation::Relu.to_string(), "relu");
    assert_eq!(Activation::LeakyRelu { alpha: 0.01 }.to_string(), "leaky_relu(alpha=0.01)");
    assert_eq!(Activation::Softplus { beta: 2.0 }.to_string(), "softplus(beta=2)");
}

/*
 * Unit tests for dispatch policies
 *
 * Tests:
 * - test_policy_default
 * - test_policy_from_str
 * - test_policy_rejects_unknown_name
 * - test_policy_serde
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod policy_tests {
    use crate::error::DispatchError;
    use crate::scheduler::Policy;

    #[test]
    fn test_policy_default() {
        assert_eq!(Policy::default(), Policy::Sweep);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("greedy".parse::<Policy>().unwrap(), Policy::Greedy);
        assert_eq!(" Sweep ".parse::<Policy>().unwrap(), Policy::Sweep);
        assert_eq!(Policy::Greedy.to_string(), "greedy");
    }

    #[test]
    fn test_policy_rejects_unknown_name() {
        // Act
        let result = "scan".parse::<Policy>();

        // Assert
        match result {
            Err(DispatchError::InvalidPolicy(name)) => assert_eq!(name, "scan"),
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_serde() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            policy: Policy,
        }

        let wrapper: Wrapper = toml::from_str(r#"policy = "greedy""#).unwrap();
        assert_eq!(wrapper.policy, Policy::Greedy);
        assert_eq!(serde_json::to_string(&Policy::Sweep).unwrap(), r#""sweep""#);
    }
}

//! HL7 v2.5 names and datatypes for the segments seen in common ADT/ORM/ORU traffic.
//!
//! Positions are 1-based in HL7 and 0-based in the tables below.

/// Long name and datatype of one field or component position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub long_name: &'static str,
    pub datatype: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDef {
    pub id: &'static str,
    pub fields: &'static [FieldDef],
}

impl SegmentDef {
    pub fn field(&self, position: usize) -> Option<&'static FieldDef> {
        position.checked_sub(1).and_then(|index| self.fields.get(index))
    }
}

/// A datatype is primitive when it has no components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatatypeDef {
    pub id: &'static str,
    pub components: &'static [FieldDef],
}

impl DatatypeDef {
    pub fn is_composite(&self) -> bool {
        !self.components.is_empty()
    }

    pub fn component(&self, position: usize) -> Option<&'static FieldDef> {
        position.checked_sub(1).and_then(|index| self.components.get(index))
    }
}

pub fn segment(id: &str) -> Option<&'static SegmentDef> {
    SEGMENTS.iter().find(|def| def.id == id)
}

pub fn datatype(id: &str) -> Option<&'static DatatypeDef> {
    DATATYPES.iter().find(|def| def.id == id)
}

const fn f(long_name: &'static str, datatype: &'static str) -> FieldDef {
    FieldDef {
        long_name,
        datatype,
    }
}

const fn primitive(id: &'static str) -> DatatypeDef {
    DatatypeDef { id, components: &[] }
}

static SEGMENTS: &[SegmentDef] = &[
    SegmentDef { id: "MSH", fields: MSH },
    SegmentDef { id: "EVN", fields: EVN },
    SegmentDef { id: "PID", fields: PID },
    SegmentDef { id: "PD1", fields: PD1 },
    SegmentDef { id: "NK1", fields: NK1 },
    SegmentDef { id: "PV1", fields: PV1 },
    SegmentDef { id: "ORC", fields: ORC },
    SegmentDef { id: "OBR", fields: OBR },
    SegmentDef { id: "OBX", fields: OBX },
    SegmentDef { id: "NTE", fields: NTE },
    SegmentDef { id: "AL1", fields: AL1 },
    SegmentDef { id: "DG1", fields: DG1 },
];

const MSH: &[FieldDef] = &[
    f("FIELD_SEPARATOR", "ST"),
    f("ENCODING_CHARACTERS", "ST"),
    f("SENDING_APPLICATION", "HD"),
    f("SENDING_FACILITY", "HD"),
    f("RECEIVING_APPLICATION", "HD"),
    f("RECEIVING_FACILITY", "HD"),
    f("DATE_TIME_OF_MESSAGE", "TS"),
    f("SECURITY", "ST"),
    f("MESSAGE_TYPE", "MSG"),
    f("MESSAGE_CONTROL_ID", "ST"),
    f("PROCESSING_ID", "PT"),
    f("VERSION_ID", "VID"),
    f("SEQUENCE_NUMBER", "NM"),
    f("CONTINUATION_POINTER", "ST"),
    f("ACCEPT_ACKNOWLEDGMENT_TYPE", "ID"),
    f("APPLICATION_ACKNOWLEDGMENT_TYPE", "ID"),
    f("COUNTRY_CODE", "ID"),
    f("CHARACTER_SET", "ID"),
    f("PRINCIPAL_LANGUAGE_OF_MESSAGE", "CE"),
    f("ALTERNATE_CHARACTER_SET_HANDLING_SCHEME", "ID"),
    f("MESSAGE_PROFILE_IDENTIFIER", "EI"),
];

const EVN: &[FieldDef] = &[
    f("EVENT_TYPE_CODE", "ID"),
    f("RECORDED_DATE_TIME", "TS"),
    f("DATE_TIME_PLANNED_EVENT", "TS"),
    f("EVENT_REASON_CODE", "IS"),
    f("OPERATOR_ID", "XCN"),
    f("EVENT_OCCURRED", "TS"),
    f("EVENT_FACILITY", "HD"),
];

const PID: &[FieldDef] = &[
    f("SET_ID_PID", "SI"),
    f("PATIENT_ID", "CX"),
    f("PATIENT_IDENTIFIER_LIST", "CX"),
    f("ALTERNATE_PATIENT_ID_PID", "CX"),
    f("PATIENT_NAME", "XPN"),
    f("MOTHER_S_MAIDEN_NAME", "XPN"),
    f("DATE_TIME_OF_BIRTH", "TS"),
    f("ADMINISTRATIVE_SEX", "IS"),
    f("PATIENT_ALIAS", "XPN"),
    f("RACE", "CE"),
    f("PATIENT_ADDRESS", "XAD"),
    f("COUNTY_CODE", "IS"),
    f("PHONE_NUMBER_HOME", "XTN"),
    f("PHONE_NUMBER_BUSINESS", "XTN"),
    f("PRIMARY_LANGUAGE", "CE"),
    f("MARITAL_STATUS", "CE"),
    f("RELIGION", "CE"),
    f("PATIENT_ACCOUNT_NUMBER", "CX"),
    f("SSN_NUMBER_PATIENT", "ST"),
    f("DRIVER_S_LICENSE_NUMBER_PATIENT", "DLN"),
    f("MOTHER_S_IDENTIFIER", "CX"),
    f("ETHNIC_GROUP", "CE"),
    f("BIRTH_PLACE", "ST"),
    f("MULTIPLE_BIRTH_INDICATOR", "ID"),
    f("BIRTH_ORDER", "NM"),
    f("CITIZENSHIP", "CE"),
    f("VETERANS_MILITARY_STATUS", "CE"),
    f("NATIONALITY", "CE"),
    f("PATIENT_DEATH_DATE_AND_TIME", "TS"),
    f("PATIENT_DEATH_INDICATOR", "ID"),
    f("IDENTITY_UNKNOWN_INDICATOR", "ID"),
    f("IDENTITY_RELIABILITY_CODE", "IS"),
    f("LAST_UPDATE_DATE_TIME", "TS"),
    f("LAST_UPDATE_FACILITY", "HD"),
    f("SPECIES_CODE", "CE"),
    f("BREED_CODE", "CE"),
    f("STRAIN", "ST"),
    f("PRODUCTION_CLASS_CODE", "CE"),
    f("TRIBAL_CITIZENSHIP", "CWE"),
];

const PD1: &[FieldDef] = &[
    f("LIVING_DEPENDENCY", "IS"),
    f("LIVING_ARRANGEMENT", "IS"),
    f("PATIENT_PRIMARY_FACILITY", "XON"),
    f("PATIENT_PRIMARY_CARE_PROVIDER_NAME_ID_NO", "XCN"),
    f("STUDENT_INDICATOR", "IS"),
    f("HANDICAP", "IS"),
    f("LIVING_WILL_CODE", "IS"),
    f("ORGAN_DONOR_CODE", "IS"),
    f("SEPARATE_BILL", "ID"),
    f("DUPLICATE_PATIENT", "CX"),
    f("PUBLICITY_CODE", "CE"),
    f("PROTECTION_INDICATOR", "ID"),
    f("PROTECTION_INDICATOR_EFFECTIVE_DATE", "DT"),
    f("PLACE_OF_WORSHIP", "XON"),
    f("ADVANCE_DIRECTIVE_CODE", "CE"),
    f("IMMUNIZATION_REGISTRY_STATUS", "IS"),
    f("IMMUNIZATION_REGISTRY_STATUS_EFFECTIVE_DATE", "DT"),
    f("PUBLICITY_CODE_EFFECTIVE_DATE", "DT"),
    f("MILITARY_BRANCH", "IS"),
    f("MILITARY_RANK_GRADE", "IS"),
    f("MILITARY_STATUS", "IS"),
];

const NK1: &[FieldDef] = &[
    f("SET_ID_NK1", "SI"),
    f("NAME", "XPN"),
    f("RELATIONSHIP", "CE"),
    f("ADDRESS", "XAD"),
    f("PHONE_NUMBER", "XTN"),
    f("BUSINESS_PHONE_NUMBER", "XTN"),
    f("CONTACT_ROLE", "CE"),
    f("START_DATE", "DT"),
    f("END_DATE", "DT"),
    f("NEXT_OF_KIN_ASSOCIATED_PARTIES_JOB_TITLE", "ST"),
    f("NEXT_OF_KIN_ASSOCIATED_PARTIES_JOB_CODE_CLASS", "JCC"),
    f("NEXT_OF_KIN_ASSOCIATED_PARTIES_EMPLOYEE_NUMBER", "CX"),
    f("ORGANIZATION_NAME_NK1", "XON"),
];

const PV1: &[FieldDef] = &[
    f("SET_ID_PV1", "SI"),
    f("PATIENT_CLASS", "IS"),
    f("ASSIGNED_PATIENT_LOCATION", "PL"),
    f("ADMISSION_TYPE", "IS"),
    f("PREADMIT_NUMBER", "CX"),
    f("PRIOR_PATIENT_LOCATION", "PL"),
    f("ATTENDING_DOCTOR", "XCN"),
    f("REFERRING_DOCTOR", "XCN"),
    f("CONSULTING_DOCTOR", "XCN"),
    f("HOSPITAL_SERVICE", "IS"),
    f("TEMPORARY_LOCATION", "PL"),
    f("PREADMIT_TEST_INDICATOR", "IS"),
    f("RE_ADMISSION_INDICATOR", "IS"),
    f("ADMIT_SOURCE", "IS"),
    f("AMBULATORY_STATUS", "IS"),
    f("VIP_INDICATOR", "IS"),
    f("ADMITTING_DOCTOR", "XCN"),
    f("PATIENT_TYPE", "IS"),
    f("VISIT_NUMBER", "CX"),
    f("FINANCIAL_CLASS", "FC"),
    f("CHARGE_PRICE_INDICATOR", "IS"),
    f("COURTESY_CODE", "IS"),
    f("CREDIT_RATING", "IS"),
    f("CONTRACT_CODE", "IS"),
    f("CONTRACT_EFFECTIVE_DATE", "DT"),
    f("CONTRACT_AMOUNT", "NM"),
    f("CONTRACT_PERIOD", "NM"),
    f("INTEREST_CODE", "IS"),
    f("TRANSFER_TO_BAD_DEBT_CODE", "IS"),
    f("TRANSFER_TO_BAD_DEBT_DATE", "DT"),
    f("BAD_DEBT_AGENCY_CODE", "IS"),
    f("BAD_DEBT_TRANSFER_AMOUNT", "NM"),
    f("BAD_DEBT_RECOVERY_AMOUNT", "NM"),
    f("DELETE_ACCOUNT_INDICATOR", "IS"),
    f("DELETE_ACCOUNT_DATE", "DT"),
    f("DISCHARGE_DISPOSITION", "IS"),
    f("DISCHARGED_TO_LOCATION", "DLD"),
    f("DIET_TYPE", "CE"),
    f("SERVICING_FACILITY", "IS"),
    f("BED_STATUS", "IS"),
    f("ACCOUNT_STATUS", "IS"),
    f("PENDING_LOCATION", "PL"),
    f("PRIOR_TEMPORARY_LOCATION", "PL"),
    f("ADMIT_DATE_TIME", "TS"),
    f("DISCHARGE_DATE_TIME", "TS"),
    f("CURRENT_PATIENT_BALANCE", "NM"),
    f("TOTAL_CHARGES", "NM"),
    f("TOTAL_ADJUSTMENTS", "NM"),
    f("TOTAL_PAYMENTS", "NM"),
    f("ALTERNATE_VISIT_ID", "CX"),
    f("VISIT_INDICATOR", "IS"),
    f("OTHER_HEALTHCARE_PROVIDER", "XCN"),
];

const ORC: &[FieldDef] = &[
    f("ORDER_CONTROL", "ID"),
    f("PLACER_ORDER_NUMBER", "EI"),
    f("FILLER_ORDER_NUMBER", "EI"),
    f("PLACER_GROUP_NUMBER", "EI"),
    f("ORDER_STATUS", "ID"),
    f("RESPONSE_FLAG", "ID"),
    f("QUANTITY_TIMING", "TQ"),
    f("PARENT", "EIP"),
    f("DATE_TIME_OF_TRANSACTION", "TS"),
    f("ENTERED_BY", "XCN"),
    f("VERIFIED_BY", "XCN"),
    f("ORDERING_PROVIDER", "XCN"),
    f("ENTERER_S_LOCATION", "PL"),
    f("CALL_BACK_PHONE_NUMBER", "XTN"),
    f("ORDER_EFFECTIVE_DATE_TIME", "TS"),
    f("ORDER_CONTROL_CODE_REASON", "CE"),
    f("ENTERING_ORGANIZATION", "CE"),
    f("ENTERING_DEVICE", "CE"),
    f("ACTION_BY", "XCN"),
    f("ADVANCED_BENEFICIARY_NOTICE_CODE", "CE"),
    f("ORDERING_FACILITY_NAME", "XON"),
    f("ORDERING_FACILITY_ADDRESS", "XAD"),
    f("ORDERING_FACILITY_PHONE_NUMBER", "XTN"),
    f("ORDERING_PROVIDER_ADDRESS", "XAD"),
    f("ORDER_STATUS_MODIFIER", "CWE"),
    f("ADVANCED_BENEFICIARY_NOTICE_OVERRIDE_REASON", "CWE"),
    f("FILLER_S_EXPECTED_AVAILABILITY_DATE_TIME", "TS"),
    f("CONFIDENTIALITY_CODE", "CWE"),
    f("ORDER_TYPE", "CWE"),
    f("ENTERER_AUTHORIZATION_MODE", "CNE"),
    f("PARENT_UNIVERSAL_SERVICE_IDENTIFIER", "CWE"),
];

const OBR: &[FieldDef] = &[
    f("SET_ID_OBR", "SI"),
    f("PLACER_ORDER_NUMBER", "EI"),
    f("FILLER_ORDER_NUMBER", "EI"),
    f("UNIVERSAL_SERVICE_IDENTIFIER", "CE"),
    f("PRIORITY_OBR", "ID"),
    f("REQUESTED_DATE_TIME", "TS"),
    f("OBSERVATION_DATE_TIME", "TS"),
    f("OBSERVATION_END_DATE_TIME", "TS"),
    f("COLLECTION_VOLUME", "CQ"),
    f("COLLECTOR_IDENTIFIER", "XCN"),
    f("SPECIMEN_ACTION_CODE", "ID"),
    f("DANGER_CODE", "CE"),
    f("RELEVANT_CLINICAL_INFORMATION", "ST"),
    f("SPECIMEN_RECEIVED_DATE_TIME", "TS"),
    f("SPECIMEN_SOURCE", "SPS"),
    f("ORDERING_PROVIDER", "XCN"),
    f("ORDER_CALLBACK_PHONE_NUMBER", "XTN"),
    f("PLACER_FIELD_1", "ST"),
    f("PLACER_FIELD_2", "ST"),
    f("FILLER_FIELD_1", "ST"),
    f("FILLER_FIELD_2", "ST"),
    f("RESULTS_RPT_STATUS_CHNG_DATE_TIME", "TS"),
    f("CHARGE_TO_PRACTICE", "MOC"),
    f("DIAGNOSTIC_SERV_SECT_ID", "ID"),
    f("RESULT_STATUS", "ID"),
    f("PARENT_RESULT", "PRL"),
    f("QUANTITY_TIMING", "TQ"),
    f("RESULT_COPIES_TO", "XCN"),
    f("PARENT", "EIP"),
    f("TRANSPORTATION_MODE", "ID"),
    f("REASON_FOR_STUDY", "CE"),
    f("PRINCIPAL_RESULT_INTERPRETER", "NDL"),
    f("ASSISTANT_RESULT_INTERPRETER", "NDL"),
    f("TECHNICIAN", "NDL"),
    f("TRANSCRIPTIONIST", "NDL"),
    f("SCHEDULED_DATE_TIME", "TS"),
    f("NUMBER_OF_SAMPLE_CONTAINERS", "NM"),
    f("TRANSPORT_LOGISTICS_OF_COLLECTED_SAMPLE", "CE"),
    f("COLLECTOR_S_COMMENT", "CE"),
    f("TRANSPORT_ARRANGEMENT_RESPONSIBILITY", "CE"),
    f("TRANSPORT_ARRANGED", "ID"),
    f("ESCORT_REQUIRED", "ID"),
    f("PLANNED_PATIENT_TRANSPORT_COMMENT", "CE"),
    f("PROCEDURE_CODE", "CE"),
    f("PROCEDURE_CODE_MODIFIER", "CE"),
    f("PLACER_SUPPLEMENTAL_SERVICE_INFORMATION", "CE"),
    f("FILLER_SUPPLEMENTAL_SERVICE_INFORMATION", "CE"),
    f("MEDICALLY_NECESSARY_DUPLICATE_PROCEDURE_REASON", "CWE"),
    f("RESULT_HANDLING", "IS"),
    f("PARENT_UNIVERSAL_SERVICE_IDENTIFIER", "CWE"),
];

/// `OBSERVATION_VALUE` is typed per segment by `VALUE_TYPE` (OBX-2).
const OBX: &[FieldDef] = &[
    f("SET_ID_OBX", "SI"),
    f("VALUE_TYPE", "ID"),
    f("OBSERVATION_IDENTIFIER", "CE"),
    f("OBSERVATION_SUB_ID", "ST"),
    f("OBSERVATION_VALUE", "varies"),
    f("UNITS", "CE"),
    f("REFERENCES_RANGE", "ST"),
    f("ABNORMAL_FLAGS", "IS"),
    f("PROBABILITY", "NM"),
    f("NATURE_OF_ABNORMAL_TEST", "ID"),
    f("OBSERVATION_RESULT_STATUS", "ID"),
    f("EFFECTIVE_DATE_OF_REFERENCE_RANGE", "TS"),
    f("USER_DEFINED_ACCESS_CHECKS", "ST"),
    f("DATE_TIME_OF_THE_OBSERVATION", "TS"),
    f("PRODUCER_S_ID", "CE"),
    f("RESPONSIBLE_OBSERVER", "XCN"),
    f("OBSERVATION_METHOD", "CE"),
    f("EQUIPMENT_INSTANCE_IDENTIFIER", "EI"),
    f("DATE_TIME_OF_THE_ANALYSIS", "TS"),
];

const NTE: &[FieldDef] = &[
    f("SET_ID_NTE", "SI"),
    f("SOURCE_OF_COMMENT", "ID"),
    f("COMMENT", "FT"),
    f("COMMENT_TYPE", "CE"),
];

const AL1: &[FieldDef] = &[
    f("SET_ID_AL1", "SI"),
    f("ALLERGEN_TYPE_CODE", "CE"),
    f("ALLERGEN_CODE_MNEMONIC_DESCRIPTION", "CE"),
    f("ALLERGY_SEVERITY_CODE", "CE"),
    f("ALLERGY_REACTION_CODE", "ST"),
    f("IDENTIFICATION_DATE", "DT"),
];

const DG1: &[FieldDef] = &[
    f("SET_ID_DG1", "SI"),
    f("DIAGNOSIS_CODING_METHOD", "ID"),
    f("DIAGNOSIS_CODE_DG1", "CE"),
    f("DIAGNOSIS_DESCRIPTION", "ST"),
    f("DIAGNOSIS_DATE_TIME", "TS"),
    f("DIAGNOSIS_TYPE", "IS"),
    f("MAJOR_DIAGNOSTIC_CATEGORY", "CE"),
    f("DIAGNOSTIC_RELATED_GROUP", "CE"),
    f("DRG_APPROVAL_INDICATOR", "ID"),
    f("DRG_GROUPER_REVIEW_CODE", "IS"),
    f("OUTLIER_TYPE", "CE"),
    f("OUTLIER_DAYS", "NM"),
    f("OUTLIER_COST", "CP"),
    f("GROUPER_VERSION_AND_TYPE", "ST"),
    f("DIAGNOSIS_PRIORITY", "ID"),
    f("DIAGNOSING_CLINICIAN", "XCN"),
    f("DIAGNOSIS_CLASSIFICATION", "IS"),
    f("CONFIDENTIAL_INDICATOR", "ID"),
    f("ATTESTATION_DATE_TIME", "TS"),
    f("DIAGNOSIS_IDENTIFIER", "EI"),
    f("DIAGNOSIS_ACTION_CODE", "ID"),
];

static DATATYPES: &[DatatypeDef] = &[
    primitive("ST"),
    primitive("TX"),
    primitive("FT"),
    primitive("NM"),
    primitive("SI"),
    primitive("ID"),
    primitive("IS"),
    primitive("DT"),
    primitive("DTM"),
    primitive("TM"),
    primitive("GTS"),
    DatatypeDef {
        id: "HD",
        components: &[
            f("NAMESPACE_ID", "IS"),
            f("UNIVERSAL_ID", "ST"),
            f("UNIVERSAL_ID_TYPE", "ID"),
        ],
    },
    DatatypeDef {
        id: "TS",
        components: &[f("TIME", "DTM"), f("DEGREE_OF_PRECISION", "ID")],
    },
    DatatypeDef {
        id: "DR",
        components: &[
            f("RANGE_START_DATE_TIME", "TS"),
            f("RANGE_END_DATE_TIME", "TS"),
        ],
    },
    DatatypeDef {
        id: "MSG",
        components: &[
            f("MESSAGE_CODE", "ID"),
            f("TRIGGER_EVENT", "ID"),
            f("MESSAGE_STRUCTURE", "ID"),
        ],
    },
    DatatypeDef {
        id: "PT",
        components: &[f("PROCESSING_ID", "ID"), f("PROCESSING_MODE", "ID")],
    },
    DatatypeDef {
        id: "VID",
        components: &[
            f("VERSION_ID", "ID"),
            f("INTERNATIONALIZATION_CODE", "CE"),
            f("INTERNATIONAL_VERSION_ID", "CE"),
        ],
    },
    DatatypeDef {
        id: "EI",
        components: &[
            f("ENTITY_IDENTIFIER", "ST"),
            f("NAMESPACE_ID", "IS"),
            f("UNIVERSAL_ID", "ST"),
            f("UNIVERSAL_ID_TYPE", "ID"),
        ],
    },
    DatatypeDef {
        id: "CE",
        components: CODED,
    },
    DatatypeDef {
        id: "CWE",
        components: CODED_WITH_EXCEPTIONS,
    },
    DatatypeDef {
        id: "CNE",
        components: CODED_WITH_EXCEPTIONS,
    },
    DatatypeDef {
        id: "CQ",
        components: &[f("QUANTITY", "NM"), f("UNITS", "CE")],
    },
    DatatypeDef {
        id: "SN",
        components: &[
            f("COMPARATOR_OR_SIGN", "ST"),
            f("NUM1", "NM"),
            f("SEPARATOR_SUFFIX", "ST"),
            f("NUM2", "NM"),
        ],
    },
    DatatypeDef {
        id: "CX",
        components: &[
            f("ID_NUMBER", "ST"),
            f("CHECK_DIGIT", "ST"),
            f("CHECK_DIGIT_SCHEME", "ID"),
            f("ASSIGNING_AUTHORITY", "HD"),
            f("IDENTIFIER_TYPE_CODE", "ID"),
            f("ASSIGNING_FACILITY", "HD"),
            f("EFFECTIVE_DATE", "DT"),
            f("EXPIRATION_DATE", "DT"),
            f("ASSIGNING_JURISDICTION", "CWE"),
            f("ASSIGNING_AGENCY_OR_DEPARTMENT", "CWE"),
        ],
    },
    DatatypeDef {
        id: "FN",
        components: &[
            f("SURNAME", "ST"),
            f("OWN_SURNAME_PREFIX", "ST"),
            f("OWN_SURNAME", "ST"),
            f("SURNAME_PREFIX_FROM_PARTNER_SPOUSE", "ST"),
            f("SURNAME_FROM_PARTNER_SPOUSE", "ST"),
        ],
    },
    DatatypeDef {
        id: "XPN",
        components: &[
            f("FAMILY_NAME", "FN"),
            f("GIVEN_NAME", "ST"),
            f("SECOND_AND_FURTHER_GIVEN_NAMES_OR_INITIALS_THEREOF", "ST"),
            f("SUFFIX_E_G_JR_OR_III", "ST"),
            f("PREFIX_E_G_DR", "ST"),
            f("DEGREE_E_G_MD", "IS"),
            f("NAME_TYPE_CODE", "ID"),
            f("NAME_REPRESENTATION_CODE", "ID"),
            f("NAME_CONTEXT", "CE"),
            f("NAME_VALIDITY_RANGE", "DR"),
            f("NAME_ASSEMBLY_ORDER", "ID"),
            f("EFFECTIVE_DATE", "TS"),
            f("EXPIRATION_DATE", "TS"),
            f("PROFESSIONAL_SUFFIX", "ST"),
        ],
    },
    DatatypeDef {
        id: "XCN",
        components: &[
            f("ID_NUMBER", "ST"),
            f("FAMILY_NAME", "FN"),
            f("GIVEN_NAME", "ST"),
            f("SECOND_AND_FURTHER_GIVEN_NAMES_OR_INITIALS_THEREOF", "ST"),
            f("SUFFIX_E_G_JR_OR_III", "ST"),
            f("PREFIX_E_G_DR", "ST"),
            f("DEGREE_E_G_MD", "IS"),
            f("SOURCE_TABLE", "IS"),
            f("ASSIGNING_AUTHORITY", "HD"),
            f("NAME_TYPE_CODE", "ID"),
            f("IDENTIFIER_CHECK_DIGIT", "ST"),
            f("CHECK_DIGIT_SCHEME", "ID"),
            f("IDENTIFIER_TYPE_CODE", "ID"),
            f("ASSIGNING_FACILITY", "HD"),
            f("NAME_REPRESENTATION_CODE", "ID"),
            f("NAME_CONTEXT", "CE"),
            f("NAME_VALIDITY_RANGE", "DR"),
            f("NAME_ASSEMBLY_ORDER", "ID"),
            f("EFFECTIVE_DATE", "TS"),
            f("EXPIRATION_DATE", "TS"),
            f("PROFESSIONAL_SUFFIX", "ST"),
            f("ASSIGNING_JURISDICTION", "CWE"),
            f("ASSIGNING_AGENCY_OR_DEPARTMENT", "CWE"),
        ],
    },
    DatatypeDef {
        id: "SAD",
        components: &[
            f("STREET_OR_MAILING_ADDRESS", "ST"),
            f("STREET_NAME", "ST"),
            f("DWELLING_NUMBER", "ST"),
        ],
    },
    DatatypeDef {
        id: "XAD",
        components: &[
            f("STREET_ADDRESS", "SAD"),
            f("OTHER_DESIGNATION", "ST"),
            f("CITY", "ST"),
            f("STATE_OR_PROVINCE", "ST"),
            f("ZIP_OR_POSTAL_CODE", "ST"),
            f("COUNTRY", "ID"),
            f("ADDRESS_TYPE", "ID"),
            f("OTHER_GEOGRAPHIC_DESIGNATION", "ST"),
            f("COUNTY_PARISH_CODE", "IS"),
            f("CENSUS_TRACT", "IS"),
            f("ADDRESS_REPRESENTATION_CODE", "ID"),
            f("ADDRESS_VALIDITY_RANGE", "DR"),
            f("EFFECTIVE_DATE", "TS"),
            f("EXPIRATION_DATE", "TS"),
        ],
    },
    DatatypeDef {
        id: "XTN",
        components: &[
            f("TELEPHONE_NUMBER", "ST"),
            f("TELECOMMUNICATION_USE_CODE", "ID"),
            f("TELECOMMUNICATION_EQUIPMENT_TYPE", "ID"),
            f("EMAIL_ADDRESS", "ST"),
            f("COUNTRY_CODE", "NM"),
            f("AREA_CITY_CODE", "NM"),
            f("LOCAL_NUMBER", "NM"),
            f("EXTENSION", "NM"),
            f("ANY_TEXT", "ST"),
            f("EXTENSION_PREFIX", "ST"),
            f("SPEED_DIAL_CODE", "ST"),
            f("UNFORMATTED_TELEPHONE_NUMBER", "ST"),
        ],
    },
    DatatypeDef {
        id: "XON",
        components: &[
            f("ORGANIZATION_NAME", "ST"),
            f("ORGANIZATION_NAME_TYPE_CODE", "IS"),
            f("ID_NUMBER", "NM"),
            f("CHECK_DIGIT", "NM"),
            f("CHECK_DIGIT_SCHEME", "ID"),
            f("ASSIGNING_AUTHORITY", "HD"),
            f("IDENTIFIER_TYPE_CODE", "ID"),
            f("ASSIGNING_FACILITY", "HD"),
            f("NAME_REPRESENTATION_CODE", "ID"),
            f("ORGANIZATION_IDENTIFIER", "ST"),
        ],
    },
    DatatypeDef {
        id: "PL",
        components: &[
            f("POINT_OF_CARE", "IS"),
            f("ROOM", "IS"),
            f("BED", "IS"),
            f("FACILITY", "HD"),
            f("LOCATION_STATUS", "IS"),
            f("PERSON_LOCATION_TYPE", "IS"),
            f("BUILDING", "IS"),
            f("FLOOR", "IS"),
            f("LOCATION_DESCRIPTION", "ST"),
            f("COMPREHENSIVE_LOCATION_IDENTIFIER", "EI"),
            f("ASSIGNING_AUTHORITY_FOR_LOCATION", "HD"),
        ],
    },
    DatatypeDef {
        id: "DLN",
        components: &[
            f("LICENSE_NUMBER", "ST"),
            f("ISSUING_STATE_PROVINCE_COUNTRY", "IS"),
            f("EXPIRATION_DATE", "DT"),
        ],
    },
];

const CODED: &[FieldDef] = &[
    f("IDENTIFIER", "ST"),
    f("TEXT", "ST"),
    f("NAME_OF_CODING_SYSTEM", "ID"),
    f("ALTERNATE_IDENTIFIER", "ST"),
    f("ALTERNATE_TEXT", "ST"),
    f("NAME_OF_ALTERNATE_CODING_SYSTEM", "ID"),
];

const CODED_WITH_EXCEPTIONS: &[FieldDef] = &[
    f("IDENTIFIER", "ST"),
    f("TEXT", "ST"),
    f("NAME_OF_CODING_SYSTEM", "ID"),
    f("ALTERNATE_IDENTIFIER", "ST"),
    f("ALTERNATE_TEXT", "ST"),
    f("NAME_OF_ALTERNATE_CODING_SYSTEM", "ID"),
    f("CODING_SYSTEM_VERSION_ID", "ST"),
    f("ALTERNATE_CODING_SYSTEM_VERSION_ID", "ST"),
    f("ORIGINAL_TEXT", "ST"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_datatype_resolves_or_is_a_known_gap() {
        // Datatypes left out of the table; fields using them fall back to short names.
        const UNCATALOGUED: &[&str] = &[
            "varies", "JCC", "FC", "DLD", "TQ", "EIP", "SPS", "MOC", "PRL", "NDL", "CP",
        ];
        for def in SEGMENTS {
            for field in def.fields {
                assert!(
                    datatype(field.datatype).is_some() || UNCATALOGUED.contains(&field.datatype),
                    "{}: {} uses unknown datatype {}",
                    def.id,
                    field.long_name,
                    field.datatype
                );
            }
        }
    }

    #[test]
    fn positions_are_one_based() {
        let obx = segment("OBX").unwrap();
        assert_eq!(obx.field(0), None);
        assert_eq!(obx.field(3).unwrap().long_name, "OBSERVATION_IDENTIFIER");
        assert_eq!(datatype("XPN").unwrap().component(1).unwrap().datatype, "FN");
    }
}

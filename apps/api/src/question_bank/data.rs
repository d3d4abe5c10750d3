// Static practice-question tables, 25 per language.

pub(super) const PYTHON_QUESTIONS: &[&str] = &[
    "What is Python?",
    "Explain list comprehensions in Python?",
    "What are decorators in Python?",
    "What is the difference between a tuple and a list in Python?",
    "Explain how Python handles memory management?",
    "What are Python's built-in data types?",
    "What is a lambda function?",
    "What is the difference between deep copy and shallow copy?",
    "How does exception handling work in Python?",
    "What is the purpose of the self keyword?",
    "What are generators in Python?",
    "What are Python modules and packages?",
    "How do you manage dependencies in Python?",
    "What is the Global Interpreter Lock (GIL) in Python?",
    "What are some common Python libraries for data science?",
    "How do you handle file operations in Python?",
    "What is the purpose of the 'with' statement in Python?",
    "What is the difference between is and == in Python?",
    "What are Python decorators used for?",
    "What is the purpose of the 'yield' keyword?",
    "Explain list slicing in Python.",
    "What is multithreading in Python?",
    "How do you optimize Python performance?",
    "What are Python's built-in functions?",
    "What is the difference between Python 2 and Python 3?",
];

pub(super) const C_QUESTIONS: &[&str] = &[
    "What is a pointer in C?",
    "Explain memory allocation in C.",
    "What is the use of the 'const' keyword?",
    "What is a structure in C?",
    "What is the difference between an array and a pointer in C?",
    "What is the purpose of the 'typedef' keyword?",
    "How do you handle dynamic memory allocation in C?",
    "What is a union in C?",
    "Explain the concept of bitwise operators in C.",
    "What is the use of 'void' pointers in C?",
    "What is recursion in C?",
    "What is a function pointer?",
    "What is the difference between 'call by value' and 'call by reference'?",
    "How do you prevent memory leaks in C?",
    "What is the significance of the 'static' keyword?",
    "What is a linked list in C?",
    "What are macros in C?",
    "Explain the use of the 'malloc' and 'calloc' functions.",
    "What is the difference between 'int' and 'long' data types?",
    "What is the purpose of the 'break' and 'continue' statements in C?",
    "Explain the concept of inline functions in C.",
    "What is the difference between '==' and '===' in C?",
    "What are header files and why are they important?",
    "What is a segmentation fault?",
    "What is the use of 'enum' in C?",
];

pub(super) const CPP_QUESTIONS: &[&str] = &[
    "Explain object-oriented programming in C++.",
    "What is a virtual function in C++?",
    "What is the difference between malloc() and new in C++?",
    "What is the role of constructors and destructors in C++?",
    "Explain the concept of multiple inheritance in C++.",
    "What is a friend function in C++?",
    "What is the difference between 'new' and 'malloc' in C++?",
    "What are templates in C++?",
    "What is exception handling in C++?",
    "What are the advantages of using C++ over C?",
    "What is an abstract class in C++?",
    "What is the purpose of the 'static' keyword in C++?",
    "Explain the concept of function overloading in C++.",
    "What is polymorphism in C++?",
    "What is encapsulation in C++?",
    "What is the difference between 'struct' and 'class' in C++?",
    "What is the difference between 'public', 'private', and 'protected' access modifiers in C++?",
    "What are the advantages of using STL in C++?",
    "What is the use of the 'this' pointer in C++?",
    "What is a constructor initializer list in C++?",
    "What is the purpose of 'virtual destructors' in C++?",
    "What are smart pointers in C++?",
    "What is RAII in C++?",
    "What is the use of the 'mutable' keyword in C++?",
    "What is a namespace in C++?",
];

pub(super) const JAVA_QUESTIONS: &[&str] = &[
    "What is a class in Java?",
    "Explain the concept of inheritance in Java.",
    "What is the difference between an interface and an abstract class in Java?",
    "What are Java's access modifiers?",
    "What is polymorphism in Java?",
    "What is encapsulation in Java?",
    "What is the use of the 'final' keyword in Java?",
    "What is a constructor in Java?",
    "What is the difference between '==', 'equals()', and 'hashCode()' in Java?",
    "Explain the concept of method overloading in Java.",
    "What is the use of 'super' in Java?",
    "What is the purpose of the 'this' keyword in Java?",
    "What is the difference between ArrayList and LinkedList in Java?",
    "What is multithreading in Java?",
    "What is synchronization in Java?",
    "Explain the concept of garbage collection in Java.",
    "What is a package in Java?",
    "What is the significance of the 'static' keyword in Java?",
    "What are Lambda expressions in Java?",
    "What are functional interfaces in Java?",
    "What is the difference between 'String' and 'StringBuilder' in Java?",
    "What is the use of the 'transient' keyword in Java?",
    "What is the purpose of the 'volatile' keyword in Java?",
    "What are Java annotations?",
    "What is a Java Stream?",
];
